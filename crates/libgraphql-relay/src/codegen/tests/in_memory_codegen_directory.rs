use crate::codegen::CodegenDirectory;
use std::collections::BTreeMap;
use std::io;

/// A [`CodegenDirectory`] that keeps files in memory and records every
/// call made to it.
#[derive(Debug, Default)]
pub(super) struct InMemoryCodegenDirectory {
    pub files: BTreeMap<String, String>,
    pub only_validate: bool,
    pub unchanged: Vec<String>,
    pub updated: Vec<String>,
    pub writes: Vec<String>,
}
impl InMemoryCodegenDirectory {
    pub fn validate_only() -> Self {
        Self {
            only_validate: true,
            ..Self::default()
        }
    }

    pub fn with_file(mut self, filename: &str, content: &str) -> Self {
        self.files.insert(filename.to_string(), content.to_string());
        self
    }

    pub fn clear_log(&mut self) {
        self.unchanged.clear();
        self.updated.clear();
        self.writes.clear();
    }
}

impl CodegenDirectory for InMemoryCodegenDirectory {
    fn only_validate(&self) -> bool {
        self.only_validate
    }

    fn read(&self, filename: &str) -> io::Result<Option<String>> {
        Ok(self.files.get(filename).cloned())
    }

    fn write_file(&mut self, filename: &str, content: &str) -> io::Result<()> {
        self.writes.push(filename.to_string());
        if !self.only_validate {
            self.files.insert(filename.to_string(), content.to_string());
        }
        Ok(())
    }

    fn mark_unchanged(&mut self, filename: &str) {
        self.unchanged.push(filename.to_string());
    }

    fn mark_updated(&mut self, filename: &str) {
        self.updated.push(filename.to_string());
    }
}

/// Always fails to read, to check that I/O errors propagate unchanged.
pub(super) struct UnreadableCodegenDirectory;
impl CodegenDirectory for UnreadableCodegenDirectory {
    fn only_validate(&self) -> bool {
        false
    }

    fn read(&self, _filename: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "no access"))
    }

    fn write_file(&mut self, _filename: &str, _content: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "no access"))
    }

    fn mark_unchanged(&mut self, _filename: &str) {}

    fn mark_updated(&mut self, _filename: &str) {}
}
