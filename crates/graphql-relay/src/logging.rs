//! Diagnostics for the `graphql-relay` binary.
//!
//! Library code logs through the `log` facade; [`init`] installs a
//! `tracing-subscriber` writer on stderr so that command output on stdout
//! (such as the JSON printed by `mask`) stays pipeable.

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    #[arg(
        action=clap::ArgAction::Count,
        global=true,
        help="Increase logging verbosity (-v for debug, -vv for trace). \
             Overrides the `LOG_LEVEL` environment variable.",
        long,
        short='v',
    )]
    pub verbose: u8,

    #[arg(
        conflicts_with="verbose",
        global=true,
        help="Only log warnings and errors.",
        long,
        short='q',
    )]
    pub quiet: bool,
}

/// The effective log level, plus a warning to emit once logging is up if
/// `env_log_level` could not be understood.
pub(crate) fn resolve_log_level(
    args: &LoggingArgs,
    env_log_level: Option<&str>,
) -> (tracing::Level, Option<String>) {
    match (args.quiet, args.verbose) {
        (true, _) => return (tracing::Level::WARN, None),
        (false, 1) => return (tracing::Level::DEBUG, None),
        (false, 2..) => return (tracing::Level::TRACE, None),
        (false, 0) => (),
    }

    let Some(env_log_level) = env_log_level.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    match env_log_level.to_ascii_lowercase().as_str() {
        "error" => (tracing::Level::ERROR, None),
        "warn" => (tracing::Level::WARN, None),
        "info" => (tracing::Level::INFO, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "trace" => (tracing::Level::TRACE, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: \
                `{env_log_level}`"
            )),
        ),
    }
}

pub(crate) fn init(args: &LoggingArgs) {
    let env_log_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(args, env_log_level.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::LoggingArgs;
    use super::resolve_log_level;
    use tracing::Level;

    fn args(verbose: u8, quiet: bool) -> LoggingArgs {
        LoggingArgs { verbose, quiet }
    }

    #[test]
    fn flags_take_precedence_over_env() {
        assert_eq!(resolve_log_level(&args(1, false), Some("error")), (Level::DEBUG, None));
        assert_eq!(resolve_log_level(&args(2, false), Some("error")), (Level::TRACE, None));
        assert_eq!(resolve_log_level(&args(5, false), None), (Level::TRACE, None));
        assert_eq!(resolve_log_level(&args(0, true), Some("trace")), (Level::WARN, None));
    }

    #[test]
    fn env_level_is_case_insensitive_and_trimmed() {
        assert_eq!(resolve_log_level(&args(0, false), Some(" DEBUG\n")), (Level::DEBUG, None));
        assert_eq!(resolve_log_level(&args(0, false), Some("Verbose")), (Level::DEBUG, None));
        assert_eq!(resolve_log_level(&args(0, false), Some("warn")), (Level::WARN, None));
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(resolve_log_level(&args(0, false), None), (Level::INFO, None));
    }

    #[test]
    fn unknown_env_level_warns_and_falls_back() {
        let (level, warning) = resolve_log_level(&args(0, false), Some("loud"));

        assert_eq!(level, Level::INFO);
        assert_eq!(
            warning.as_deref(),
            Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
        );
    }
}
