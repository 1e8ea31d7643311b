use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::{Error, Result};
use crate::iconset::ICONSET_DIR;

/// Temporary directory holding the iconset while it is being built.
///
/// The directory is only deleted by [`StagingDir::remove`]. Dropping it any
/// other way keeps it on disk and prints its location, so the partial
/// iconset can be inspected after a failed run.
#[derive(Debug)]
pub struct StagingDir {
    dir: Option<TempDir>,
    path: PathBuf,
    iconset: PathBuf,
}

impl StagingDir {
    /// Create a uniquely named directory under `root` (created if missing),
    /// with an empty `.iconset` directory inside.
    ///
    /// # Errors
    /// [`Error::TempDir`] or [`Error::IconsetDir`].
    pub fn create_in(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).map_err(Error::TempDir)?;
        let dir = tempfile::Builder::new()
            .prefix("")
            .rand_bytes(6)
            .tempdir_in(root)
            .map_err(Error::TempDir)?;

        let path = dir.path().to_path_buf();
        let iconset = path.join(ICONSET_DIR);
        let staging = Self { dir: Some(dir), path, iconset };

        fs::create_dir(&staging.iconset)
            .map_err(|source| Error::IconsetDir { path: staging.iconset.clone(), source })?;

        debug!("Staging in {}", staging.path.display());
        Ok(staging)
    }

    /// The staging directory itself.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `.iconset` directory the PNGs go into.
    #[must_use]
    pub fn iconset(&self) -> &Path {
        &self.iconset
    }

    /// Delete the directory and everything in it.
    ///
    /// # Errors
    /// [`Error::Cleanup`] if the directory can't be removed. It is not
    /// reported as retained in that case.
    pub fn remove(mut self) -> Result<()> {
        if let Some(dir) = self.dir.take() {
            dir.close().map_err(|source| Error::Cleanup { path: self.path.clone(), source })?;
            debug!("Removed {}", self.path.display());
        }
        Ok(())
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.keep();
            eprintln!("Temporary dir not removed: {}", path.display());
        }
    }
}
