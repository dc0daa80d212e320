use loandoc_render_core::RenderedArtifact;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Somewhere a rendered artifact can be saved under a file name.
pub trait DownloadTarget {
    /// Saves the artifact and returns where it ended up.
    fn save(&self, filename: &str, artifact: &RenderedArtifact) -> io::Result<PathBuf>;
}

/// Writes downloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FsDownloadTarget {
    dir: PathBuf,
}

impl FsDownloadTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTarget for FsDownloadTarget {
    fn save(&self, filename: &str, artifact: &RenderedArtifact) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, &artifact.bytes)?;
        log::info!(
            "Saved {} ({} bytes, {}) to {}",
            filename,
            artifact.len(),
            artifact.mime_type(),
            path.display()
        );
        Ok(path)
    }
}
