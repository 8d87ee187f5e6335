use crate::ir::Fragment;
use crate::ir::Root;

/// A compiled artifact ready to be emitted.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind")]
pub enum GeneratedNode {
    /// An executable operation together with its printed query text.
    Batch(Batch),
    Fragment(Fragment),
}
impl GeneratedNode {
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Batch(batch) => batch.name.as_str(),
            Self::Fragment(fragment) => fragment.name(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub name: String,
    pub operation: Root,
    /// The printed query text sent to the server.
    pub text: String,
}
