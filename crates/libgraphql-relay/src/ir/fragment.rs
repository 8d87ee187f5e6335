use crate::ir::ArgumentDefinition;
use crate::ir::Directive;
use crate::ir::Metadata;
use crate::ir::Selection;

/// A named, reusable selection set along with the argument definitions it
/// requires.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub argument_definitions: Vec<ArgumentDefinition>,
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub name: String,
    pub selections: Vec<Selection>,
    /// The type condition (`on User`) of this fragment.
    #[serde(rename = "type")]
    pub type_condition: String,
}
impl Fragment {
    pub fn new(name: impl Into<String>, type_condition: impl Into<String>) -> Self {
        Self {
            argument_definitions: vec![],
            directives: vec![],
            metadata: None,
            name: name.into(),
            selections: vec![],
            type_condition: type_condition.into(),
        }
    }

    /// Look up one of this fragment's argument definitions by name.
    pub fn argument_definition(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.argument_definitions.iter().find(|argdef| argdef.name() == name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    pub fn with_argument_definitions(
        mut self,
        argument_definitions: Vec<ArgumentDefinition>,
    ) -> Self {
        self.argument_definitions = argument_definitions;
        self
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }
}
