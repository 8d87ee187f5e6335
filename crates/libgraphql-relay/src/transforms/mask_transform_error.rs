use crate::CompilerContextError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum MaskTransformError {
    #[error(
        "Cannot unmask fragment spread `{first_source}` because argument \
        `{argument_name}` has been declared in `{second_source}` and they \
        are not the same."
    )]
    ArgumentConflict {
        argument_name: String,
        first_source: String,
        second_source: String,
    },

    #[error("Failure to serialize an argument definition for comparison: {0}")]
    ArgumentSerialization(Arc<serde_json::Error>),

    #[error("Failure to assemble the transformed document set: {0}")]
    CompilerContext(#[from] CompilerContextError),

    #[error(
        "Cannot unmask fragment spread `{fragment_spread_name}` because it \
        has local argument definitions."
    )]
    LocalArgumentUnmask {
        fragment_spread_name: String,
    },

    #[error("Unknown fragment `{fragment_spread_name}`.")]
    UnknownFragment {
        fragment_spread_name: String,
    },

    #[error(
        "Cannot unmask fragment spread `{fragment_spread_name}` with \
        arguments. Apply fragment arguments before unmasking."
    )]
    UnmaskWithArguments {
        fragment_spread_name: String,
    },

    #[error(
        "Unmasked fragment spreads form a cycle: {}",
        .cycle_path.join(" -> ")
    )]
    UnmaskCycle {
        cycle_path: Vec<String>,
    },
}
impl From<serde_json::Error> for MaskTransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::ArgumentSerialization(Arc::new(err))
    }
}
