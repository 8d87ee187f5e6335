//! Inlines ("unmasks") fragment spreads annotated with
//! `@relay(mask: false)`.
//!
//! Each marked spread is replaced by an [`InlineFragment`] carrying the
//! referenced fragment's type condition and selections (and the spread's
//! own directives and metadata). The referenced fragment's argument
//! definitions are hoisted into the enclosing [`Fragment`] so that the
//! inlined selections still have every argument they depend on.
//!
//! A hoisted argument definition must be structurally identical (under
//! [canonical JSON](crate::canonical_json)) to any other definition of the
//! same name, whether it was hoisted from another spread or declared by the
//! enclosing fragment itself.

use crate::CompilerContext;
use crate::canonical_json;
use crate::ir::ArgumentDefinition;
use crate::ir::Definition;
use crate::ir::Fragment;
use crate::ir::FragmentSpread;
use crate::ir::InlineFragment;
use crate::ir::Root;
use crate::ir::Selection;
use crate::ir::Value;
use crate::ir::find_directive;
use crate::ir_transformer;
use crate::ir_transformer::IrTransformer;
use crate::ir_transformer::Traversal;
use crate::transforms::MaskTransformError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, MaskTransformError>;

pub const RELAY_DIRECTIVE_NAME: &str = "relay";
pub const MASK_ARGUMENT_NAME: &str = "mask";

/// Run the mask transform over every definition in `context`.
pub fn transform(context: &CompilerContext) -> Result<CompilerContext> {
    ir_transformer::transform(context, &RelayMaskTransform, MaskTransformState::default)
}

#[derive(Clone, Debug)]
struct HoistedArgumentDefinition {
    argument_definition: ArgumentDefinition,
    /// Name of the fragment spread that introduced this definition.
    source: String,
}

/// Per-definition traversal state for [`RelayMaskTransform`].
#[derive(Debug, Default)]
pub struct MaskTransformState {
    hoisted_argument_definitions: IndexMap<String, HoistedArgumentDefinition>,
    /// The enclosing definition followed by every spread currently being
    /// unmasked, outermost first.
    unmask_path: Vec<String>,
}

impl MaskTransformState {
    fn hoist(
        &mut self,
        argument_definition: &ArgumentDefinition,
        fragment_spread_name: &str,
    ) -> Result<()> {
        let argument_name = argument_definition.name();
        if let Some(hoisted) = self.hoisted_argument_definitions.get(argument_name) {
            if !canonical_json::canonical_eq(
                argument_definition,
                &hoisted.argument_definition,
            )? {
                return Err(MaskTransformError::ArgumentConflict {
                    argument_name: argument_name.to_string(),
                    first_source: hoisted.source.to_owned(),
                    second_source: fragment_spread_name.to_string(),
                });
            }
            return Ok(());
        }

        log::trace!(
            "Hoisting argument definition `{argument_name}` from fragment \
            spread `{fragment_spread_name}`.",
        );
        self.hoisted_argument_definitions.insert(
            argument_name.to_string(),
            HoistedArgumentDefinition {
                argument_definition: argument_definition.clone(),
                source: fragment_spread_name.to_string(),
            },
        );
        Ok(())
    }
}

/// The [`IrTransformer`] behind [`transform`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RelayMaskTransform;

impl IrTransformer for RelayMaskTransform {
    type State = MaskTransformState;
    type Error = MaskTransformError;

    fn visit_root(
        &self,
        traversal: &Traversal<'_>,
        root: &Root,
        state: &mut Self::State,
    ) -> Result<Root> {
        // Marked spreads within operations are inlined too, but operations
        // declare their own variables so nothing is hoisted into them.
        state.unmask_path.push(root.name.to_owned());
        let result = traversal.traverse_root(self, root, state)?;
        state.unmask_path.pop();
        Ok(result)
    }

    fn visit_fragment(
        &self,
        traversal: &Traversal<'_>,
        fragment: &Fragment,
        state: &mut Self::State,
    ) -> Result<Fragment> {
        state.unmask_path.push(fragment.name.to_owned());
        let mut result = traversal.traverse_fragment(self, fragment, state)?;
        state.unmask_path.pop();

        let hoisted_argument_definitions =
            std::mem::take(&mut state.hoisted_argument_definitions);
        for (argument_name, hoisted) in hoisted_argument_definitions {
            match result.argument_definition(&argument_name) {
                Some(existing) => {
                    if !canonical_json::canonical_eq(
                        existing,
                        &hoisted.argument_definition,
                    )? {
                        return Err(MaskTransformError::ArgumentConflict {
                            argument_name,
                            first_source: hoisted.source,
                            second_source: fragment.name.to_owned(),
                        });
                    }
                },

                None => result.argument_definitions.push(hoisted.argument_definition),
            }
        }

        Ok(result)
    }

    fn visit_fragment_spread(
        &self,
        traversal: &Traversal<'_>,
        fragment_spread: &FragmentSpread,
        state: &mut Self::State,
    ) -> Result<Selection> {
        if !has_relay_mask_false_directive(fragment_spread) {
            return Ok(Selection::FragmentSpread(fragment_spread.clone()));
        }

        let fragment_spread_name = fragment_spread.name.as_str();
        if !fragment_spread.args.is_empty() {
            return Err(MaskTransformError::UnmaskWithArguments {
                fragment_spread_name: fragment_spread_name.to_string(),
            });
        }

        let fragment = traversal.lookup(fragment_spread_name)
            .and_then(Definition::as_fragment)
            .ok_or_else(|| MaskTransformError::UnknownFragment {
                fragment_spread_name: fragment_spread_name.to_string(),
            })?;

        if fragment.argument_definitions.iter().any(ArgumentDefinition::is_local) {
            return Err(MaskTransformError::LocalArgumentUnmask {
                fragment_spread_name: fragment_spread_name.to_string(),
            });
        }

        if state.unmask_path.iter().any(|name| name == fragment_spread_name) {
            let mut cycle_path = state.unmask_path.clone();
            cycle_path.push(fragment_spread_name.to_string());
            return Err(MaskTransformError::UnmaskCycle { cycle_path });
        }

        log::debug!(
            "Unmasking fragment spread `{fragment_spread_name}` within `{}`.",
            state.unmask_path.first().map(String::as_str).unwrap_or_default(),
        );

        // The spread's directives (including `@relay(mask: false)` itself)
        // carry over onto the inline fragment unchanged.
        let inline_fragment = InlineFragment {
            directives: fragment_spread.directives.clone(),
            metadata: fragment_spread.metadata.clone(),
            selections: fragment.selections.clone(),
            type_condition: fragment.type_condition.clone(),
        };

        for argument_definition in &fragment.argument_definitions {
            state.hoist(argument_definition, fragment_spread_name)?;
        }

        state.unmask_path.push(fragment_spread_name.to_string());
        let result = self.visit_inline_fragment(traversal, &inline_fragment, state)?;
        state.unmask_path.pop();
        Ok(result)
    }
}

/// Whether `fragment_spread` carries `@relay(mask: false)` with a literal
/// `false`. Any other value (including a variable) leaves the spread masked.
pub fn has_relay_mask_false_directive(fragment_spread: &FragmentSpread) -> bool {
    let Some(relay_directive) = find_directive(
        &fragment_spread.directives,
        RELAY_DIRECTIVE_NAME,
    ) else {
        return false;
    };

    relay_directive.literal_argument_values()
        .get(MASK_ARGUMENT_NAME)
        .copied()
        .flatten()
        .and_then(Value::as_bool)
        == Some(false)
}
