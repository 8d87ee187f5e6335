//! The compiler's intermediate representation of a parsed and validated
//! GraphQL document set.
//!
//! Nodes are plain data. Passes never mutate their input and instead build
//! new nodes (see [`crate::ir_transformer`]).

mod argument;
mod argument_definition;
mod condition;
mod definition;
mod directive;
mod field;
mod fragment;
mod fragment_spread;
mod inline_fragment;
mod selection;
mod type_annotation;
mod value;

pub use argument::Argument;
pub use argument::ArgumentValue;
pub use argument_definition::ArgumentDefinition;
pub use condition::Condition;
pub use definition::Definition;
pub use definition::OperationKind;
pub use definition::Root;
pub use directive::Directive;
pub use directive::find_directive;
pub use field::LinkedField;
pub use field::ScalarField;
pub use fragment::Fragment;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use selection::Selection;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_annotation::TypeAnnotationParseError;
pub use value::Metadata;
pub use value::Value;

#[cfg(test)]
mod tests;
