use crate::CommandResult;

/// A `graphql-relay` subcommand. Everything it wants printed, along with the
/// process exit code, goes through the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self) -> CommandResult;
}
