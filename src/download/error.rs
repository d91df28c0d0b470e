//! Downloader error types

pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("All {failed} downloads failed")]
    AllFailed { failed: usize },
}
