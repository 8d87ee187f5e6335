use crate::ir::ArgumentDefinition;
use crate::ir::Directive;
use crate::ir::Fragment;
use crate::ir::Selection;

/// A top-level definition in a document set: either an executable
/// operation ([`Root`]) or a [`Fragment`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind")]
pub enum Definition {
    Fragment(Fragment),
    Root(Root),
}
impl Definition {
    pub fn as_fragment(&self) -> Option<&Fragment> {
        if let Self::Fragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }

    pub fn as_root(&self) -> Option<&Root> {
        if let Self::Root(root) = self {
            Some(root)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Fragment(fragment) => fragment.name(),
            Self::Root(root) => root.name(),
        }
    }
}
impl From<Fragment> for Definition {
    fn from(value: Fragment) -> Self {
        Self::Fragment(value)
    }
}
impl From<Root> for Definition {
    fn from(value: Root) -> Self {
        Self::Root(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

/// An executable operation (query, mutation or subscription).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub argument_definitions: Vec<ArgumentDefinition>,
    pub directives: Vec<Directive>,
    pub name: String,
    pub operation: OperationKind,
    pub selections: Vec<Selection>,
    /// The root type of the operation (`Query`, `Mutation`, ...).
    #[serde(rename = "type")]
    pub type_: String,
}
impl Root {
    pub fn new(
        name: impl Into<String>,
        operation: OperationKind,
        type_: impl Into<String>,
    ) -> Self {
        Self {
            argument_definitions: vec![],
            directives: vec![],
            name: name.into(),
            operation,
            selections: vec![],
            type_: type_.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_argument_definitions(
        mut self,
        argument_definitions: Vec<ArgumentDefinition>,
    ) -> Self {
        self.argument_definitions = argument_definitions;
        self
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }
}
