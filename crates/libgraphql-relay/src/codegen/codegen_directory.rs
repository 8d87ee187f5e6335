use std::io;

/// The output directory that generated artifacts are committed to.
///
/// Filenames are relative to the directory. Implementations decide how (and
/// whether) content actually reaches storage: when [`only_validate`] is
/// `true`, [`write_file`] must not mutate anything and only record that the
/// file would have changed.
///
/// [`only_validate`]: CodegenDirectory::only_validate
/// [`write_file`]: CodegenDirectory::write_file
pub trait CodegenDirectory {
    /// Whether this directory is in validate-only ("dry run") mode.
    fn only_validate(&self) -> bool;

    /// Read the current content of `filename`, or `None` if it does not
    /// exist.
    fn read(&self, filename: &str) -> io::Result<Option<String>>;

    fn write_file(&mut self, filename: &str, content: &str) -> io::Result<()>;

    /// Record that `filename` is already up to date.
    fn mark_unchanged(&mut self, filename: &str);

    /// Record that `filename` is out of date without writing it.
    fn mark_updated(&mut self, filename: &str);
}
