//! Ephemeral simulation workspaces
//!
//! Each simulation attempt owns one exclusive temporary directory holding
//! the memory image and the compiled artifact. The directory is removed on
//! every exit path when the [`Workspace`] is dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name the memory image is written to inside the workspace
pub const IMAGE_FILE: &str = "program.hex";

/// File name of the compiled simulation artifact
pub const ARTIFACT_FILE: &str = "cpu_sim";

/// An exclusive scratch directory for one simulation attempt
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create the directory and write the memory image into it
    pub fn create(image: &str) -> io::Result<Self> {
        let dir = TempDir::with_prefix("risc16-sim-")?;
        fs::write(dir.path().join(IMAGE_FILE), image)?;
        Ok(Self { dir })
    }

    /// Workspace root; also the working directory for both tool steps
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the compile step leaves its artifact
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.path().join(ARTIFACT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_written() {
        let ws = Workspace::create("9005\nE000").unwrap();
        let written = fs::read_to_string(ws.path().join(IMAGE_FILE)).unwrap();
        assert_eq!(written, "9005\nE000");
    }

    #[test]
    fn test_removed_on_drop() {
        let path = {
            let ws = Workspace::create("0000").unwrap();
            ws.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_workspaces_are_exclusive() {
        let a = Workspace::create("0000").unwrap();
        let b = Workspace::create("0000").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
