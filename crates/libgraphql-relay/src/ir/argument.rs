use crate::ir::TypeAnnotation;
use crate::ir::Value;

/// An argument bound at a field, directive or fragment spread.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    pub value: ArgumentValue,
}
impl Argument {
    pub fn literal(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: ArgumentValue::Literal {
                value: value.into(),
            },
        }
    }

    pub fn variable(
        name: impl Into<String>,
        variable_name: impl Into<String>,
        type_: TypeAnnotation,
    ) -> Self {
        Self {
            name: name.into(),
            value: ArgumentValue::Variable {
                type_,
                variable_name: variable_name.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The bound value if it is a literal, or `None` if it refers to a
    /// variable.
    pub fn literal_value(&self) -> Option<&Value> {
        match &self.value {
            ArgumentValue::Literal { value } => Some(value),
            ArgumentValue::Variable { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum ArgumentValue {
    Literal {
        value: Value,
    },

    Variable {
        #[serde(rename = "type")]
        type_: TypeAnnotation,
        variable_name: String,
    },
}
