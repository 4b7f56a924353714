//! On-demand, memoized output directory creation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::ports::Filesystem;
use crate::domain::OverwritePolicy;
use crate::error::AppsmithResult;

/// Creates output directories on demand, remembering which ones this run has
/// already verified so a directory is checked (and warned about) at most once.
///
/// The checked set is scoped to one scaffold run: created empty when the
/// orchestrator starts rendering, grows monotonically, discarded at the end.
#[derive(Debug, Default)]
pub struct DirectoryMaterializer {
    checked: HashSet<PathBuf>,
}

impl DirectoryMaterializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `path` exists as a directory.
    ///
    /// Idempotent per run: a path already processed is a no-op. When the
    /// directory pre-exists and the policy permits overwrites, a single
    /// "may overwrite" warning is logged; creation itself never fails on an
    /// existing directory.
    pub fn ensure(
        &mut self,
        filesystem: &dyn Filesystem,
        path: &Path,
        policy: OverwritePolicy,
    ) -> AppsmithResult<()> {
        if self.checked.contains(path) {
            return Ok(());
        }

        if filesystem.exists(path) && policy != OverwritePolicy::Reject {
            warn!(path = %path.display(), "directory exists, contents may be overwritten");
        } else {
            debug!(path = %path.display(), "creating output directory");
        }

        filesystem.create_dir_all(path)?;
        self.checked.insert(path.to_path_buf());
        Ok(())
    }

    /// How many distinct directories this run has verified.
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
