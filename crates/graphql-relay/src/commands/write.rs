use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_relay::codegen::CodegenChanges;
use libgraphql_relay::codegen::FsCodegenDirectory;
use libgraphql_relay::codegen::GeneratedNode;
use libgraphql_relay::codegen::write_generated_file;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct WriteCmd {
    #[arg(
        help="Directory that generated artifacts are written to.",
        long,
    )]
    output_dir: PathBuf,

    #[arg(
        help="Module name the artifact filename is derived from.",
        long,
    )]
    module_prefix: String,

    #[arg(
        help="Optional platform suffix for the artifact filename.",
        long,
    )]
    platform: Option<String>,

    #[arg(
        help="Only check whether the artifact is current; never write.",
        long,
    )]
    validate: bool,

    #[arg(
        help="JSON file holding the generated node (a `Batch` or a \
             `Fragment`).",
        name="NODE_JSON",
    )]
    node_json: PathBuf,

    #[arg(
        help="File holding the generated text to commit.",
        name="TEXT_FILE",
    )]
    text_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for WriteCmd {
    pub async fn run(self) -> CommandResult {
        let changes = match self.run_impl() {
            Ok(changes) => changes,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to write generated file: {err:#}",
                output_utils::RED_X,
            )),
        };

        let summary = format_changes(&changes);
        if self.validate && changes.has_changes() {
            CommandResult::stdout_failure(format_args!(
                "{} Generated files are out of date:\n{summary}",
                output_utils::RED_X,
            ))
        } else {
            CommandResult::stdout(format_args!(
                "{} {}:\n{summary}",
                output_utils::GREEN_CHECK,
                if self.validate {
                    "Generated files are up to date"
                } else {
                    "Generated files written"
                },
            ))
        }
    }
}

impl WriteCmd {
    fn run_impl(&self) -> anyhow::Result<CodegenChanges> {
        let node_json = std::fs::read_to_string(&self.node_json)
            .with_context(|| format!("Failed to read {:#?}", self.node_json))?;
        let generated_node: GeneratedNode = serde_json::from_str(node_json.as_str())
            .with_context(|| {
                format!("Failed to parse a generated node from {:#?}", self.node_json)
            })?;
        let generated_text = std::fs::read_to_string(&self.text_file)
            .with_context(|| format!("Failed to read {:#?}", self.text_file))?;

        log::debug!(
            "Committing `{}` to {:#?}{}.",
            generated_node.name(),
            self.output_dir,
            if self.validate { " (validate-only)" } else { "" },
        );
        let mut codegen_dir = FsCodegenDirectory::new(&self.output_dir, self.validate);
        write_generated_file(
            &mut codegen_dir,
            generated_node,
            generated_text.as_str(),
            self.module_prefix.as_str(),
            self.platform.as_deref(),
        )?;

        Ok(codegen_dir.changes().clone())
    }
}

fn format_changes(changes: &CodegenChanges) -> String {
    [
        ("Created", &changes.created),
        ("Updated", &changes.updated),
        ("Unchanged", &changes.unchanged),
    ]
    .iter()
    .map(|(label, filenames)| format!(
        "  * {label} {} files{}",
        filenames.len(),
        filenames.iter()
            .map(|filename| format!("\n      - {filename}"))
            .collect::<String>(),
    ))
    .collect::<Vec<_>>()
    .join("\n")
}
