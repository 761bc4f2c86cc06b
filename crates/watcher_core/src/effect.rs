#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a status-change sentence; the runner confirms success back
    /// through `Msg::NoticeDelivered`.
    SendNotice { text: String },
    /// Best-effort failure report; delivery is never confirmed.
    SendMalfunctionReport { text: String },
}
