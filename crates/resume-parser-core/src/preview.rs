//! Revocable local preview handles.
//!
//! A [`PreviewHandle`] is a scratch copy of the selected document inside a
//! manager-owned temporary directory. The manager holds at most one handle;
//! deriving a new one revokes the previous handle first, and dropping the
//! manager revokes whatever is still live.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};
use thiserror::Error;

use crate::document::Document;
use crate::selection::SelectionId;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("failed to write preview copy: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot express {} as a file URL", .0.display())]
    Url(PathBuf),
}

/// Identifies one derived handle. Never reused within a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(u64);

#[derive(Debug)]
pub struct PreviewHandle {
    id: HandleId,
    selection: SelectionId,
    file: NamedTempFile,
    url: String,
}

impl PreviewHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// The selection this handle was derived from.
    pub fn selection(&self) -> SelectionId {
        self.selection
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// `file://` URL of the scratch copy, used for the fallback link.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Default)]
pub struct PreviewManager {
    current: Option<PreviewHandle>,
    // Declared after `current` so the live file is removed before the directory.
    scratch: Option<TempDir>,
    /// Where the scratch directory is created. `None` means the system temp dir.
    parent: Option<PathBuf>,
    next_id: u64,
    revoked: u64,
}

impl PreviewManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager whose scratch directory lives under `parent`.
    pub fn in_dir(parent: impl Into<PathBuf>) -> Self {
        let mut manager = Self::default();
        manager.parent = Some(parent.into());
        manager
    }

    /// Derive a handle for `document`, revoking the previous handle first.
    ///
    /// On error no handle is live.
    pub fn derive(
        &mut self,
        selection: SelectionId,
        document: &Document,
    ) -> Result<&PreviewHandle, PreviewError> {
        self.revoke_current();

        let suffix = format!(".{}", document.extension());
        let dir = self.scratch_dir()?;
        let mut file = tempfile::Builder::new()
            .prefix("preview-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(&document.bytes)?;
        file.flush()?;

        let url = reqwest::Url::from_file_path(file.path())
            .map_err(|()| PreviewError::Url(file.path().to_path_buf()))?
            .to_string();
        self.next_id += 1;
        let id = HandleId(self.next_id);
        tracing::debug!(handle = id.0, %url, document = %document.name, "preview handle derived");

        Ok(self.current.insert(PreviewHandle {
            id,
            selection,
            file,
            url,
        }))
    }

    /// Revoke the handle with `id`. Revoking a handle that is not live is a no-op.
    ///
    /// Returns whether a handle was revoked.
    pub fn revoke(&mut self, id: HandleId) -> bool {
        if self.current.as_ref().is_some_and(|h| h.id == id) {
            self.revoke_current()
        } else {
            false
        }
    }

    /// Revoke the live handle, if any. Returns whether one was revoked.
    pub fn revoke_current(&mut self) -> bool {
        let Some(handle) = self.current.take() else {
            return false;
        };
        let id = handle.id.0;
        if let Err(e) = handle.file.close() {
            tracing::warn!(handle = id, error = %e, "failed to remove preview copy");
        }
        self.revoked += 1;
        tracing::debug!(handle = id, "preview handle revoked");
        true
    }

    pub fn current(&self) -> Option<&PreviewHandle> {
        self.current.as_ref()
    }

    /// Number of live handles: zero or one.
    pub fn live_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Total handles derived over the manager's lifetime.
    pub fn derived_count(&self) -> u64 {
        self.next_id
    }

    /// Total handles revoked over the manager's lifetime.
    pub fn revoked_count(&self) -> u64 {
        self.revoked
    }

    fn scratch_dir(&mut self) -> std::io::Result<&Path> {
        let dir = match self.scratch.take() {
            Some(dir) => dir,
            None => {
                let mut builder = tempfile::Builder::new();
                builder.prefix("resume-parser-preview-");
                match &self.parent {
                    Some(parent) => builder.tempdir_in(parent)?,
                    None => builder.tempdir()?,
                }
            }
        };
        Ok(self.scratch.insert(dir).path())
    }
}

impl Drop for PreviewManager {
    fn drop(&mut self) {
        self.revoke_current();
    }
}
