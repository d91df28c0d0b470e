//! Notification error types

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Host call failed: {cause}")]
    Host { cause: String },
}
