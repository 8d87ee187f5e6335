use crate::codegen::CodegenDirectory;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// The set of files touched while committing artifacts to a
/// [`FsCodegenDirectory`], in the order they were reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodegenChanges {
    pub created: Vec<String>,
    pub unchanged: Vec<String>,
    pub updated: Vec<String>,
}
impl CodegenChanges {
    /// Whether any file was (or in validate-only mode, would have been)
    /// created or modified.
    pub fn has_changes(&self) -> bool {
        !self.created.is_empty() || !self.updated.is_empty()
    }
}

/// A [`CodegenDirectory`] backed by a directory on the local filesystem.
///
/// The directory is created on the first write. Writes whose content is
/// identical to what is already on disk are skipped and reported as
/// unchanged.
#[derive(Clone, Debug)]
pub struct FsCodegenDirectory {
    changes: CodegenChanges,
    only_validate: bool,
    root: PathBuf,
}

impl FsCodegenDirectory {
    pub fn new(root: impl AsRef<Path>, only_validate: bool) -> Self {
        Self {
            changes: CodegenChanges::default(),
            only_validate,
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn changes(&self) -> &CodegenChanges {
        &self.changes
    }

    pub fn has_changes(&self) -> bool {
        self.changes.has_changes()
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    fn read_bytes(&self, filename: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(filename)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl CodegenDirectory for FsCodegenDirectory {
    fn only_validate(&self) -> bool {
        self.only_validate
    }

    /// Content that is not valid UTF-8 is decoded lossily, so a corrupted
    /// artifact never carries a usable hash and gets regenerated.
    fn read(&self, filename: &str) -> io::Result<Option<String>> {
        Ok(self.read_bytes(filename)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn write_file(&mut self, filename: &str, content: &str) -> io::Result<()> {
        match self.read_bytes(filename)? {
            Some(existing) if existing == content.as_bytes() => {
                self.mark_unchanged(filename);
                return Ok(());
            },
            Some(_) => self.mark_updated(filename),
            None => self.changes.created.push(filename.to_string()),
        }

        if self.only_validate {
            log::debug!("Not writing `{filename}` (validate-only).");
            return Ok(());
        }

        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(filename), content)?;
        log::debug!("Wrote {:#?}.", self.path_for(filename));
        Ok(())
    }

    fn mark_unchanged(&mut self, filename: &str) {
        self.changes.unchanged.push(filename.to_string());
    }

    fn mark_updated(&mut self, filename: &str) {
        self.changes.updated.push(filename.to_string());
    }
}
