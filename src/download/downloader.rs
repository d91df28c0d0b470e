//! Download execution

use std::path::{Path, PathBuf};

use crate::download::error::{DownloadError, DownloadResult};
use crate::sounds::api::SoundFile;

/// Outcome counts for one download run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Where a sound file lands on disk: `<dest>/<subdirectory>/<filename>`.
pub fn target_path(dest: &Path, file: &SoundFile) -> PathBuf {
    dest.join(&file.subdirectory).join(&file.filename)
}

/// Fetch every sound file into `dest`.
///
/// Existing files are skipped without a network round trip. A failed fetch
/// is logged and counted; the run only errors out when nothing succeeded
/// at all, so a flaky mirror cannot wipe out a mostly-good run.
pub async fn download_sounds(files: &[SoundFile], dest: &Path) -> DownloadResult<DownloadSummary> {
    let client = reqwest::Client::new();
    let mut summary = DownloadSummary::default();

    for file in files {
        let target = target_path(dest, file);
        if target.is_file() {
            log::debug!("{} already present, skipping", target.display());
            summary.skipped += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        match fetch_one(&client, file, &target).await {
            Ok(()) => {
                log::info!("Fetched {} -> {}", file.url, target.display());
                summary.fetched += 1;
            }
            Err(e) => {
                log::warn!("Failed to fetch {}: {}", file.url, e);
                summary.failed += 1;
            }
        }
    }

    if summary.fetched == 0 && summary.skipped == 0 && summary.failed > 0 {
        return Err(DownloadError::AllFailed {
            failed: summary.failed,
        });
    }

    log::info!(
        "Download finished: {} fetched, {} skipped, {} failed",
        summary.fetched,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

async fn fetch_one(
    client: &reqwest::Client,
    file: &SoundFile,
    target: &Path,
) -> DownloadResult<()> {
    let response = client.get(&file.url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sounds::api::{sounds_to_download, Faction};

    #[test]
    fn test_target_path_uses_subdirectory_layout() {
        let files = sounds_to_download(Faction::Horde, "ignored");
        let target = target_path(Path::new("/srv/sounds"), &files[0]);
        assert_eq!(
            target,
            Path::new("/srv/sounds")
                .join("horde")
                .join(&files[0].filename)
        );
    }

    #[tokio::test]
    async fn test_existing_files_skipped_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let files = sounds_to_download(Faction::Alliance, "http://127.0.0.1:1/unroutable");

        // Pre-create every target so no fetch is attempted
        for file in &files {
            let target = target_path(dir.path(), file);
            std::fs::create_dir_all(target.parent().unwrap()).unwrap();
            std::fs::write(&target, b"mp3").unwrap();
        }

        let summary = download_sounds(&files, dir.path()).await.unwrap();
        assert_eq!(summary.skipped, files.len());
        assert_eq!(summary.fetched, 0);
        assert_eq!(summary.failed, 0);
    }
}
