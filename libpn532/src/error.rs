// libpn532-rs/libpn532/src/error.rs

use thiserror::Error;

/// Which ready-wait of an exchange ran out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum WaitStage {
    /// Waiting for the ACK frame after sending a command
    #[display(fmt = "ack")]
    Ack,
    /// Waiting for the response frame after the ACK
    #[display(fmt = "response")]
    Response,
}

/// Coarse classification of an [`Error`], used by callers to pick a
/// retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The ready signal was not observed in time
    Timeout,
    /// ACK mismatch, truncated read or bus failure
    LinkIntegrity,
    /// Well-formed response carrying an unexpected or failing status
    ChipStatus,
    /// Rejected before any bus activity
    Misuse,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("bus error: {0}")]
    Bus(String),

    #[error("timed out waiting for {stage}")]
    Timeout { stage: WaitStage },

    #[error("ack mismatch: got {actual:02x?}")]
    AckMismatch { actual: Vec<u8> },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response prefix: got {actual:02x?}")]
    UnexpectedPrefix { actual: Vec<u8> },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("expected exactly one target, found {found}")]
    TargetCount { found: u8 },

    #[error("no UID decoder for target type BrTy {brty:#04x}")]
    UnsupportedTarget { brty: u8 },

    #[error("mifare authentication failed for block {block}: status={status:#04x}")]
    AuthenticationFailed { block: u16, status: u8 },

    #[error("mifare read failed for block {block}: status={status:#04x}")]
    ReadFailed { block: u16, status: u8 },

    #[error("block data too long: {len} bytes (max 16)")]
    OversizeBlock { len: usize },

    #[error("block {block} is out of the addressable range (0..=255)")]
    BlockOutOfRange { block: u16 },
}

impl Error {
    /// Classify the error into one of the four failure families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::Bus(_)
            | Error::AckMismatch { .. }
            | Error::InvalidLength { .. }
            | Error::FrameFormat(_) => ErrorKind::LinkIntegrity,
            Error::UnexpectedPrefix { .. }
            | Error::UnexpectedResponse { .. }
            | Error::TargetCount { .. }
            | Error::UnsupportedTarget { .. }
            | Error::AuthenticationFailed { .. }
            | Error::ReadFailed { .. } => ErrorKind::ChipStatus,
            Error::DeviceNotFound | Error::OversizeBlock { .. } | Error::BlockOutOfRange { .. } => {
                ErrorKind::Misuse
            }
        }
    }

    /// Timeouts may succeed when retried as-is; everything else needs the
    /// caller to change something first.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

pub type Result<T> = std::result::Result<T, Error>;
