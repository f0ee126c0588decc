//! Template and document file access

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Opens documentation templates
pub trait TemplateSource {
    fn open_template(&self, path: &Path) -> io::Result<String>;
}

/// Writes generated documents
pub trait DocWriter {
    fn write_doc(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Filesystem backed templates and documents
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocFiles;

impl TemplateSource for FsDocFiles {
    fn open_template(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl DocWriter for FsDocFiles {
    fn write_doc(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

/// In-memory templates and documents (for testing or dry runs)
#[derive(Debug, Default)]
pub struct InMemoryDocFiles {
    files: RwLock<HashMap<PathBuf, String>>,
    writes: AtomicUsize,
}

impl InMemoryDocFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.read().ok()?.get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl TemplateSource for InMemoryDocFiles {
    fn open_template(&self, path: &Path) -> io::Result<String> {
        self.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Wrong path: {}", path.display()),
            )
        })
    }
}

impl DocWriter for InMemoryDocFiles {
    fn write_doc(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "document store poisoned"))?;
        files.insert(path.to_path_buf(), content.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
