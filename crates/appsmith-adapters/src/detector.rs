//! Existing-application detection via the static marker file.
//!
//! A scaffold run leaves `<app>/.appsmith.toml` behind:
//!
//! ```toml
//! version = "0.1.0"
//! scaffolded = true
//! ```
//!
//! The probe reads that file without executing anything and without touching
//! any process-wide state. It is a best-effort heuristic: a directory counts
//! as a previously-scaffolded application only when the marker parses and
//! carries both attributes; every failure mode (missing directory, missing
//! file, parse error, missing attribute, `scaffolded = false`) collapses to
//! `false`, logged at debug level only.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use appsmith_core::MARKER_FILE;
use appsmith_core::application::ports::{ApplicationDetector, Filesystem};
use appsmith_core::domain::Operation;

/// The marker contract a generated application must carry.
#[derive(Debug, Deserialize)]
struct Marker {
    version: String,
    scaffolded: bool,
}

/// Marker-file application detector.
pub struct MarkerProbe<F> {
    filesystem: F,
}

impl<F: Filesystem> MarkerProbe<F> {
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }
}

impl<F: Filesystem> ApplicationDetector for MarkerProbe<F> {
    fn detect(&self, candidate_directory: &Path, application: &Operation) -> bool {
        let marker_path = candidate_directory
            .join(application.module_name())
            .join(MARKER_FILE);

        let raw = match self.filesystem.read_file(&marker_path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %marker_path.display(), error = %e, "no readable marker");
                return false;
            }
        };

        match toml::from_str::<Marker>(&raw) {
            Ok(marker) if marker.scaffolded => {
                debug!(
                    path = %marker_path.display(),
                    version = marker.version,
                    "scaffolded application detected"
                );
                true
            }
            Ok(_) => {
                debug!(path = %marker_path.display(), "marker present but scaffolded = false");
                false
            }
            Err(e) => {
                debug!(path = %marker_path.display(), error = %e, "marker failed to parse");
                false
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    fn probe_with(marker: Option<&str>) -> bool {
        let fs = MemoryFilesystem::new();
        if let Some(content) = marker {
            fs.seed_file("/apps/my_app/.appsmith.toml", content);
        }
        MarkerProbe::new(fs).detect(Path::new("/apps"), &Operation::new("my_app"))
    }

    #[test]
    fn valid_marker_detects() {
        assert!(probe_with(Some("version = \"0.1.0\"\nscaffolded = true\n")));
    }

    #[test]
    fn missing_marker_is_false() {
        assert!(!probe_with(None));
    }

    #[test]
    fn unparseable_marker_is_false() {
        assert!(!probe_with(Some("not toml at all {{")));
    }

    #[test]
    fn marker_without_version_is_false() {
        assert!(!probe_with(Some("scaffolded = true\n")));
    }

    #[test]
    fn scaffolded_false_is_false() {
        assert!(!probe_with(Some("version = \"0.1.0\"\nscaffolded = false\n")));
    }

    #[test]
    fn probe_uses_module_name_form() {
        let fs = MemoryFilesystem::new();
        fs.seed_file(
            "/apps/my_app_/.appsmith.toml",
            "version = \"0.1.0\"\nscaffolded = true\n",
        );
        // "My App!" normalizes to my_app_, so the probe looks there.
        assert!(MarkerProbe::new(fs).detect(Path::new("/apps"), &Operation::new("My App!")));
    }
}
