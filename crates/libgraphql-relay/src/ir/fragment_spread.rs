use crate::ir::Argument;
use crate::ir::Directive;
use crate::ir::Metadata;

/// A named reference (`...UserFields`) to a [`Fragment`](crate::ir::Fragment)
/// from within some other selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpread {
    pub args: Vec<Argument>,
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub name: String,
}
impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            args: vec![],
            directives: vec![],
            metadata: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_args(mut self, args: Vec<Argument>) -> Self {
        self.args = args;
        self
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
