use crate::ir::ArgumentValue;
use crate::ir::Selection;

/// Selections guarded by an `@include`/`@skip` condition.
///
/// The selections are included when `condition` evaluates to
/// `passing_value`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub condition: ArgumentValue,
    pub passing_value: bool,
    pub selections: Vec<Selection>,
}
