use crate::ir::Directive;
use crate::ir::Metadata;
use crate::ir::Selection;

/// An unnamed selection set guarded by a type condition (`... on User`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFragment {
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub selections: Vec<Selection>,
    pub type_condition: String,
}
impl InlineFragment {
    pub fn new(type_condition: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            metadata: None,
            selections: vec![],
            type_condition: type_condition.into(),
        }
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }
}
