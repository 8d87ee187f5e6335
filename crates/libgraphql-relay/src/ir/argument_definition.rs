use crate::ir::TypeAnnotation;
use crate::ir::Value;

/// An argument requirement declared by a [`Fragment`](crate::ir::Fragment)
/// or [`Root`](crate::ir::Root).
///
/// A [`LocalArgumentDefinition`](ArgumentDefinition::LocalArgumentDefinition)
/// is declared by the fragment itself (`@argumentDefinitions`) and may carry
/// a default value. A
/// [`RootArgumentDefinition`](ArgumentDefinition::RootArgumentDefinition) is
/// an argument the fragment expects to be provided by whatever operation
/// ultimately includes it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum ArgumentDefinition {
    LocalArgumentDefinition {
        default_value: Option<Value>,
        name: String,
        #[serde(rename = "type")]
        type_: TypeAnnotation,
    },

    RootArgumentDefinition {
        name: String,
        #[serde(rename = "type")]
        type_: TypeAnnotation,
    },
}
impl ArgumentDefinition {
    pub fn local(
        name: impl Into<String>,
        type_: TypeAnnotation,
        default_value: Option<Value>,
    ) -> Self {
        Self::LocalArgumentDefinition {
            default_value,
            name: name.into(),
            type_,
        }
    }

    pub fn root(name: impl Into<String>, type_: TypeAnnotation) -> Self {
        Self::RootArgumentDefinition {
            name: name.into(),
            type_,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Self::LocalArgumentDefinition { default_value, .. }
                => default_value.as_ref(),
            Self::RootArgumentDefinition { .. }
                => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::LocalArgumentDefinition { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::LocalArgumentDefinition { name, .. }
                | Self::RootArgumentDefinition { name, .. }
                => name.as_str(),
        }
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        match self {
            Self::LocalArgumentDefinition { type_, .. }
                | Self::RootArgumentDefinition { type_, .. }
                => type_,
        }
    }
}
