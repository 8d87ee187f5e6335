use crate::commands;
use crate::logging::LoggingArgs;

#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-relay",
    version,
    about = "Runs Relay compiler passes over IR files and commits generated artifacts.",
    arg_required_else_help = true,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: commands::CommandEnum,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}
