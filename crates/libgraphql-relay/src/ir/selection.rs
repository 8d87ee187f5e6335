use crate::ir::Condition;
use crate::ir::FragmentSpread;
use crate::ir::InlineFragment;
use crate::ir::LinkedField;
use crate::ir::ScalarField;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Condition(Condition),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
    LinkedField(LinkedField),
    ScalarField(ScalarField),
}
impl Selection {
    /// The nested selections of this selection, if it has any.
    pub fn selections(&self) -> Option<&[Selection]> {
        match self {
            Self::Condition(condition) => Some(&condition.selections),
            Self::InlineFragment(inline) => Some(&inline.selections),
            Self::LinkedField(field) => Some(&field.selections),
            Self::FragmentSpread(_)
                | Self::ScalarField(_)
                => None,
        }
    }
}
impl From<Condition> for Selection {
    fn from(value: Condition) -> Self {
        Self::Condition(value)
    }
}
impl From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
impl From<LinkedField> for Selection {
    fn from(value: LinkedField) -> Self {
        Self::LinkedField(value)
    }
}
impl From<ScalarField> for Selection {
    fn from(value: ScalarField) -> Self {
        Self::ScalarField(value)
    }
}
