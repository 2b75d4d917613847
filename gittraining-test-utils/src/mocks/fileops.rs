//! In-memory mock file system

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use gittraining_core::error::FileOpsError;
use gittraining_core::fileops::FileOps;

/// [`FileOps`] over an in-memory map.
///
/// Loads of unknown paths report `NotFound`; paths registered with
/// [`MockFileOps::failing_on`] report a scripted I/O failure instead,
/// for exercising the non-missing error branch.
#[derive(Debug, Default)]
pub struct MockFileOps {
    files: Mutex<HashMap<String, String>>,
    failing: Mutex<Vec<String>>,
}

impl MockFileOps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: seed a file.
    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), contents.to_string());
        self
    }

    /// Builder-style: make every access to `path` fail with a
    /// permission error.
    pub fn failing_on(self, path: &str) -> Self {
        self.failing.lock().unwrap().push(path.to_string());
        self
    }

    fn check_failing(&self, path: &str) -> Result<(), FileOpsError> {
        if self.failing.lock().unwrap().iter().any(|p| p == path) {
            return Err(FileOpsError::Io {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "scripted failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FileOps for MockFileOps {
    async fn exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    async fn load(&self, path: &str) -> Result<String, FileOpsError> {
        self.check_failing(path)?;
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FileOpsError::NotFound {
                path: path.to_string(),
            })
    }

    async fn save(&self, path: &str, contents: &str) -> Result<(), FileOpsError> {
        self.check_failing(path)?;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
