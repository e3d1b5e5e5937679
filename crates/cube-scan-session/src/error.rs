use cube_scan_core::FaceId;

/// Errors returned by session updates.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("capture ticket #{seq} for face {face} was not issued by this session")]
    UnknownTicket { face: FaceId, seq: u64 },
    #[error("session lock poisoned by a panicked writer")]
    Poisoned,
}
