use crate::canonical_json;
use crate::codegen::CodegenDirectory;
use crate::codegen::GeneratedNode;
use md5::Digest;
use md5::Md5;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, WriteGeneratedFileError>;

/// Extension of every generated artifact.
pub const GENERATED_FILE_EXTENSION: &str = "re";

/// Mixed into every content hash. Changing it invalidates every previously
/// generated artifact.
pub const CACHE_BREAKER_SALT: &str = "cache-breaker-2";

pub const HASH_HEADER_TAG: &str = "@relayHash";

static HASH_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@relayHash ([0-9a-fA-F]{32})\b")
        .expect("the hash header pattern is a valid regex")
});

/// Commit `generated_text` for `generated_node` to `codegen_dir`.
///
/// Only [`GeneratedNode::Batch`] artifacts are hash-checked: if the hash
/// embedded in the existing file matches, nothing is written and the file is
/// marked unchanged; if it differs and the directory is validate-only, the
/// file is marked updated without being written. Every other artifact is
/// always written.
///
/// Returns the node if an artifact was written, or `None` if nothing new was
/// produced.
pub fn write_generated_file<D: CodegenDirectory + ?Sized>(
    codegen_dir: &mut D,
    generated_node: GeneratedNode,
    generated_text: &str,
    module_prefix: &str,
    platform: Option<&str>,
) -> Result<Option<GeneratedNode>> {
    let filename = generated_file_name(module_prefix, platform)?;

    let mut hash = None;
    if generated_node.is_batch() {
        let old_content = codegen_dir.read(filename.as_str())?;
        let new_hash = compute_hash(&generated_node, generated_text)?;

        if old_content.as_deref().and_then(extract_hash) == Some(new_hash.as_str()) {
            log::debug!("`{filename}` is up to date.");
            codegen_dir.mark_unchanged(filename.as_str());
            return Ok(None);
        }

        if codegen_dir.only_validate() {
            log::debug!("`{filename}` is out of date.");
            codegen_dir.mark_updated(filename.as_str());
            return Ok(None);
        }

        hash = Some(new_hash);
    }

    let module_text = format_module(generated_text, hash.as_deref());
    codegen_dir.write_file(filename.as_str(), module_text.as_str())?;
    Ok(Some(generated_node))
}

/// `lowercaseFirst(module_prefix + "Types" + ("." + platform)?)` plus the
/// artifact extension.
pub fn generated_file_name(
    module_prefix: &str,
    platform: Option<&str>,
) -> Result<String> {
    if module_prefix.is_empty() {
        return Err(WriteGeneratedFileError::EmptyModuleName);
    }

    let module_name = format!("{module_prefix}Types");
    let platform_name = match platform {
        Some(platform) if !platform.is_empty() => format!("{module_name}.{platform}"),
        _ => module_name,
    };

    Ok(format!(
        "{}.{GENERATED_FILE_EXTENSION}",
        lowercase_first(platform_name.as_str()),
    ))
}

/// MD5 over the salt, the node's canonical JSON and the generated text,
/// as 32 lowercase hex digits.
pub fn compute_hash(
    generated_node: &GeneratedNode,
    generated_text: &str,
) -> std::result::Result<String, serde_json::Error> {
    let mut hasher = Md5::new();
    hasher.update(CACHE_BREAKER_SALT.as_bytes());
    hasher.update(canonical_json::to_canonical_json(generated_node)?.as_bytes());
    hasher.update(generated_text.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// The hash embedded in a previously generated file.
///
/// Content that looks like it contains unresolved merge conflict markers
/// never yields a hash, so such files are always regenerated.
pub fn extract_hash(content: &str) -> Option<&str> {
    if content.contains("<<<<<") || content.contains(">>>>>") {
        return None;
    }
    HASH_HEADER_REGEX.captures(content)
        .and_then(|captures| captures.get(1))
        .map(|hash| hash.as_str())
}

pub fn format_module(generated_text: &str, hash: Option<&str>) -> String {
    format!(
        "/* {HASH_HEADER_TAG} {} */\n\n{generated_text}",
        hash.unwrap_or_default(),
    )
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum WriteGeneratedFileError {
    #[error("Cannot derive a generated file name from an empty module name.")]
    EmptyModuleName,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failure to serialize the generated node for hashing: {0}")]
    Serialization(#[from] serde_json::Error),
}
