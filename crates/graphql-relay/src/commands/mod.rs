mod mask;
mod write;

use crate::CommandResult;
use mask::MaskCmd;
use write::WriteCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Inline `@relay(mask: false)` fragment spreads in IR JSON files.
    Mask(Box<MaskCmd>),

    /// Commit a generated artifact to an output directory.
    Write(Box<WriteCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandResult {
        match self {
            Self::Mask(cmd) => cmd.run().await,
            Self::Write(cmd) => cmd.run().await,
        }
    }
}
