use crate::ir::Argument;
use crate::ir::Directive;
use crate::ir::Metadata;
use crate::ir::Selection;
use crate::ir::TypeAnnotation;

/// A field selection with no sub-selections (`name`, `id`, ...).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarField {
    #[serde(default)]
    pub alias: Option<String>,
    pub args: Vec<Argument>,
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeAnnotation,
}
impl ScalarField {
    pub fn new(name: impl Into<String>, type_: TypeAnnotation) -> Self {
        Self {
            alias: None,
            args: vec![],
            directives: vec![],
            metadata: None,
            name: name.into(),
            type_,
        }
    }

    /// The key this field's value is stored under in a response: the alias
    /// if one was given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

/// A field selection with its own nested selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedField {
    #[serde(default)]
    pub alias: Option<String>,
    pub args: Vec<Argument>,
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    pub name: String,
    pub selections: Vec<Selection>,
    #[serde(rename = "type")]
    pub type_: TypeAnnotation,
}
impl LinkedField {
    pub fn new(name: impl Into<String>, type_: TypeAnnotation) -> Self {
        Self {
            alias: None,
            args: vec![],
            directives: vec![],
            metadata: None,
            name: name.into(),
            selections: vec![],
            type_,
        }
    }

    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }
}
