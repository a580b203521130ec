//! Vulkan SDK debug libraries
//!
//! The debug libs ship as a separate zip. Their presence is detected by a
//! single marker file under the output directory; when it is missing the
//! archive is fetched into memory and unpacked over the output directory.

use crate::error::{Result, SetupError};
use crate::setup::{Fetcher, SetupConfig, SetupPaths};
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

/// What [`ensure_debug_libs`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLibsStatus {
    /// Marker file found, nothing downloaded
    AlreadyPresent,
    /// Archive downloaded and extracted
    Downloaded { entries: usize },
}

/// Check for the marker file and fetch the debug libs if it is absent.
pub fn ensure_debug_libs(
    config: &SetupConfig,
    paths: &SetupPaths,
    fetcher: &dyn Fetcher,
) -> Result<DebugLibsStatus> {
    let status = if paths.marker.exists() {
        tracing::debug!("marker {} present", paths.marker.display());
        DebugLibsStatus::AlreadyPresent
    } else {
        println!(
            "No Vulkan SDK debug libs found. (Checked {})",
            paths.marker.display()
        );
        println!("Downloading {}", config.debug_libs_url);

        let archive = fetcher.fetch_bytes(&config.debug_libs_url)?;
        let entries = extract_archive(&archive, &paths.output_dir, &config.debug_libs_url)?;

        if !paths.marker.exists() {
            tracing::warn!(
                "{} still missing after extracting {}",
                paths.marker.display(),
                config.debug_libs_url
            );
        }
        DebugLibsStatus::Downloaded { entries }
    };

    println!(
        "Vulkan SDK debug libs located at {}",
        paths.output_dir.display()
    );
    Ok(status)
}

/// Unpack every entry of an in-memory zip into `out_dir`. Returns the entry count.
fn extract_archive(bytes: &[u8], out_dir: &Path, url: &str) -> Result<usize> {
    let archive_error = |source| SetupError::Archive {
        url: url.to_string(),
        source,
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_error)?;
    let entries = archive.len();

    std::fs::create_dir_all(out_dir).map_err(|source| SetupError::io(out_dir, source))?;
    archive.extract(out_dir).map_err(archive_error)?;

    tracing::info!("extracted {} entries into {}", entries, out_dir.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::testing::{zip_bytes, FailingFetcher, RecordingFetcher};
    use tempfile::tempdir;

    const MARKER_ENTRY: &str = "Lib/shaderc_shaderdd.lib";

    #[test]
    fn test_present_marker_skips_network() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());
        std::fs::create_dir_all(paths.marker.parent().unwrap()).unwrap();
        std::fs::write(&paths.marker, b"lib").unwrap();

        let status = ensure_debug_libs(&config, &paths, &FailingFetcher).unwrap();

        assert_eq!(status, DebugLibsStatus::AlreadyPresent);
    }

    #[test]
    fn test_missing_marker_downloads_once_and_extracts() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());
        let fetcher = RecordingFetcher::new(zip_bytes(&[
            (MARKER_ENTRY, "debug lib"),
            ("Lib/vulkan-1d.lib", "vk"),
            ("Bin/glslangValidatord.exe", "exe"),
        ]));

        let status = ensure_debug_libs(&config, &paths, &fetcher).unwrap();

        assert_eq!(status, DebugLibsStatus::Downloaded { entries: 3 });
        assert_eq!(fetcher.urls(), vec![config.debug_libs_url.clone()]);
        assert_eq!(std::fs::read(&paths.marker).unwrap(), b"debug lib");
        assert!(paths.output_dir.join("Bin/glslangValidatord.exe").exists());

        // second run sees the marker
        let again = ensure_debug_libs(&config, &paths, &fetcher).unwrap();
        assert_eq!(again, DebugLibsStatus::AlreadyPresent);
        assert_eq!(fetcher.urls().len(), 1);
    }

    #[test]
    fn test_archive_without_marker_still_succeeds() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());
        let fetcher = RecordingFetcher::new(zip_bytes(&[("README.txt", "hello")]));

        let status = ensure_debug_libs(&config, &paths, &fetcher).unwrap();

        assert_eq!(status, DebugLibsStatus::Downloaded { entries: 1 });
        assert!(!paths.marker.exists());
    }

    #[test]
    fn test_corrupt_archive_is_error() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());
        let fetcher = RecordingFetcher::new(b"not a zip".to_vec());

        let err = ensure_debug_libs(&config, &paths, &fetcher).unwrap_err();

        assert!(matches!(err, SetupError::Archive { .. }));
    }

    #[test]
    fn test_network_error_propagates() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());

        let err = ensure_debug_libs(&config, &paths, &FailingFetcher).unwrap_err();

        assert!(matches!(err, SetupError::HttpStatus { .. }));
        assert!(!paths.output_dir.exists());
    }

    #[test]
    fn test_escaping_entry_is_rejected() {
        let dir = tempdir().unwrap();
        let config = SetupConfig::default();
        let paths = config.resolve(dir.path());
        let fetcher = RecordingFetcher::new(zip_bytes(&[("../../evil.txt", "x")]));

        let err = ensure_debug_libs(&config, &paths, &fetcher).unwrap_err();

        assert!(matches!(err, SetupError::Archive { .. }));
        assert!(!dir.path().join("GameEngine/evil.txt").exists());
        assert!(!dir.path().join("evil.txt").exists());
        assert!(!paths.output_dir.join("evil.txt").exists());
    }
}
