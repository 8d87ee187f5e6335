use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_relay::CompilerContext;
use libgraphql_relay::ir::Definition;
use libgraphql_relay::transforms::mask_transform;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct MaskCmd {
    #[arg(
        default_values_t=[
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for IR \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    ir_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more IR JSON files (each holding an array of \
             definitions) or directories containing such files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for MaskCmd {
    pub async fn run(self) -> CommandResult {
        match self.run_impl().await {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to unmask fragments: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

impl MaskCmd {
    async fn run_impl(&self) -> anyhow::Result<String> {
        let file_paths = collect_ir_files(
            &self.file_or_dir_paths,
            &self.ir_file_exts,
        )?;
        log::debug!("Found {} IR files to be loaded.", file_paths.len());

        // Parsed concurrently, added in scan order.
        let loads: Vec<_> =
            file_paths.iter()
                .cloned()
                .map(|file_path| tokio::task::spawn_blocking(move || {
                    load_definitions(file_path.as_path())
                }))
                .collect();

        let mut context = CompilerContext::new();
        for (file_path, load) in file_paths.iter().zip(loads) {
            for definition in load.await?? {
                context.add(definition)
                    .with_context(|| format!("while loading {file_path:#?}"))?;
            }
        }
        log::debug!("Loaded {} definitions.", context.len());

        let transformed = mask_transform::transform(&context)?;
        let output = serde_json::to_string_pretty(&transformed.into_definitions())?;
        Ok(output)
    }
}

/// Every file at or under `paths` whose extension is one of `exts`.
///
/// A single explicitly named file is accepted even if its extension does not
/// match.
fn collect_ir_files(paths: &[PathBuf], exts: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let exts: HashSet<&str> =
        exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to scan filesystem entries at/under {path:#?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if entry_path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| exts.contains(ext)) {
                log::trace!("Found IR file at {entry_path:#?}.");
                file_paths.push(entry_path.to_path_buf());
            }
        }
    }

    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to load {first_arg_path:#?} even though it doesn't \
            match any of the --ir-file-exts.",
        );
        file_paths.push(first_arg_path.to_owned());
    }

    Ok(file_paths)
}

fn load_definitions(file_path: &Path) -> anyhow::Result<Vec<Definition>> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {file_path:#?}"))?;
    serde_json::from_str(content.as_str())
        .with_context(|| format!("Failed to parse IR definitions from {file_path:#?}"))
}

#[cfg(test)]
mod tests {
    use super::collect_ir_files;
    use super::load_definitions;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(test_name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "graphql-relay-{}-{test_name}",
            std::process::id(),
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(path.join("nested")).unwrap();
        path
    }

    #[test]
    fn collects_matching_files_recursively() {
        let dir = scratch_dir("collects_matching_files_recursively");
        fs::write(dir.join("a.json"), "[]").unwrap();
        fs::write(dir.join("nested/b.json"), "[]").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let found = collect_ir_files(&[dir.clone()], &[".json".to_string()]).unwrap();

        assert_eq!(found, vec![dir.join("a.json"), dir.join("nested/b.json")]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn single_explicit_file_ignores_extension_filter() {
        let dir = scratch_dir("single_explicit_file_ignores_extension_filter");
        let file = dir.join("definitions.ir");
        fs::write(&file, "[]").unwrap();

        let found = collect_ir_files(&[file.clone()], &["json".to_string()]).unwrap();

        assert_eq!(found, vec![file]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn loads_definition_arrays() {
        let dir = scratch_dir("loads_definition_arrays");
        let file = dir.join("defs.json");
        fs::write(&file, r#"[
            {
                "kind": "Fragment",
                "name": "UserFields",
                "type": "User",
                "argumentDefinitions": [],
                "directives": [],
                "metadata": {},
                "selections": []
            }
        ]"#).unwrap();

        let definitions = load_definitions(&file).unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name(), "UserFields");
        assert!(load_definitions(&dir.join("missing.json")).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
