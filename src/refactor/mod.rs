//! In-place rewrite of the target file.
//!
//! The write is a plain overwrite of the same path: no temp file, no
//! rename, no backup. A failed write can leave the file truncated; the
//! error is propagated and nothing is retried.

use crate::error::{Result, StripError};
use crate::strip::{DeadFunctionStripper, StripOutcome};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Applies a [`DeadFunctionStripper`] to a file on disk.
pub struct SourceRewriter {
    stripper: DeadFunctionStripper,
    dry_run: bool,
}

impl SourceRewriter {
    pub fn new(stripper: DeadFunctionStripper) -> Self {
        Self {
            stripper,
            dry_run: false,
        }
    }

    /// Compute the outcome without writing anything back.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Read `path`, strip marked functions, overwrite `path` with the
    /// result. The whole file is held in memory between read and write.
    pub fn rewrite(&self, path: &Path) -> Result<StripOutcome> {
        let content = fs::read_to_string(path).map_err(|e| StripError::read(path, e))?;
        debug!(bytes = content.len(), "read {}", path.display());

        let outcome = self.stripper.strip(&content);
        info!(
            removed = outcome.removed_lines(),
            "strip pass over {} complete",
            path.display()
        );

        if self.dry_run {
            info!("dry run, leaving {} untouched", path.display());
        } else {
            fs::write(path, &outcome.content).map_err(|e| StripError::write(path, e))?;
        }

        Ok(outcome)
    }
}
