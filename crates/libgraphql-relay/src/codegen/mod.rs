//! Persisting generated artifacts.
//!
//! [`write_generated_file`] decides, from a content hash embedded in the
//! previously generated file, whether an artifact needs to be rewritten at
//! all. All file access goes through a [`CodegenDirectory`], which also
//! records what was (or, in validate-only mode, would have been) changed.

mod codegen_directory;
mod fs_codegen_directory;
mod generated_node;
mod write_generated_file;

pub use codegen_directory::CodegenDirectory;
pub use fs_codegen_directory::CodegenChanges;
pub use fs_codegen_directory::FsCodegenDirectory;
pub use generated_node::Batch;
pub use generated_node::GeneratedNode;
pub use write_generated_file::CACHE_BREAKER_SALT;
pub use write_generated_file::GENERATED_FILE_EXTENSION;
pub use write_generated_file::HASH_HEADER_TAG;
pub use write_generated_file::WriteGeneratedFileError;
pub use write_generated_file::compute_hash;
pub use write_generated_file::extract_hash;
pub use write_generated_file::format_module;
pub use write_generated_file::generated_file_name;
pub use write_generated_file::write_generated_file;

#[cfg(test)]
mod tests;
