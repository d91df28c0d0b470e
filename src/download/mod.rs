//! Sound downloader
//!
//! Fetches the builder's download list into the local sounds directory,
//! laid out as `<dest>/<subdirectory>/<filename>`. Already-present files
//! are skipped; individual failures are logged and counted rather than
//! aborting the run.

pub(crate) mod downloader;
pub(crate) mod error;

pub use downloader::{download_sounds, target_path, DownloadSummary};
pub use error::{DownloadError, DownloadResult};
