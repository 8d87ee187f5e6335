//! A generic, exhaustively-dispatched traversal over the compiler IR.
//!
//! An [`IrTransformer`] provides one handler per node kind. Every handler
//! has a default implementation that rebuilds the node from its recursively
//! transformed children, so a transformer only overrides the node kinds it
//! cares about. A handler that does not call back into the [`Traversal`]
//! stops descent at that node.
//!
//! Handlers receive a caller-owned `&mut State` which is threaded through
//! the whole traversal of a single top-level [`Definition`]. [`transform`]
//! creates a fresh state for every top-level definition, so no state is
//! ever shared between the traversals of two definitions.
//!
//! Input nodes are never mutated; a transform always produces new nodes and
//! a new [`CompilerContext`].

use crate::CompilerContext;
use crate::CompilerContextError;
use crate::ir::Condition;
use crate::ir::Definition;
use crate::ir::Fragment;
use crate::ir::FragmentSpread;
use crate::ir::InlineFragment;
use crate::ir::LinkedField;
use crate::ir::Root;
use crate::ir::ScalarField;
use crate::ir::Selection;

pub trait IrTransformer {
    /// Mutable state shared by every handler invocation during the traversal
    /// of one top-level definition.
    type State;
    type Error: From<CompilerContextError>;

    fn visit_root(
        &self,
        traversal: &Traversal<'_>,
        root: &Root,
        state: &mut Self::State,
    ) -> Result<Root, Self::Error> {
        traversal.traverse_root(self, root, state)
    }

    fn visit_fragment(
        &self,
        traversal: &Traversal<'_>,
        fragment: &Fragment,
        state: &mut Self::State,
    ) -> Result<Fragment, Self::Error> {
        traversal.traverse_fragment(self, fragment, state)
    }

    fn visit_condition(
        &self,
        traversal: &Traversal<'_>,
        condition: &Condition,
        state: &mut Self::State,
    ) -> Result<Selection, Self::Error> {
        traversal.traverse_condition(self, condition, state).map(Selection::from)
    }

    fn visit_fragment_spread(
        &self,
        _traversal: &Traversal<'_>,
        fragment_spread: &FragmentSpread,
        _state: &mut Self::State,
    ) -> Result<Selection, Self::Error> {
        Ok(Selection::FragmentSpread(fragment_spread.clone()))
    }

    fn visit_inline_fragment(
        &self,
        traversal: &Traversal<'_>,
        inline_fragment: &InlineFragment,
        state: &mut Self::State,
    ) -> Result<Selection, Self::Error> {
        traversal
            .traverse_inline_fragment(self, inline_fragment, state)
            .map(Selection::from)
    }

    fn visit_linked_field(
        &self,
        traversal: &Traversal<'_>,
        field: &LinkedField,
        state: &mut Self::State,
    ) -> Result<Selection, Self::Error> {
        traversal.traverse_linked_field(self, field, state).map(Selection::from)
    }

    fn visit_scalar_field(
        &self,
        _traversal: &Traversal<'_>,
        field: &ScalarField,
        _state: &mut Self::State,
    ) -> Result<Selection, Self::Error> {
        Ok(Selection::ScalarField(field.clone()))
    }
}

/// Handle passed to every [`IrTransformer`] handler. Gives access to the
/// (untransformed) input document set and continues descent into a node's
/// children.
#[derive(Clone, Copy, Debug)]
pub struct Traversal<'ctx> {
    context: &'ctx CompilerContext,
}

impl<'ctx> Traversal<'ctx> {
    pub fn new(context: &'ctx CompilerContext) -> Self {
        Self { context }
    }

    /// The input document set. Transformed definitions are never visible
    /// here.
    pub fn context(&self) -> &'ctx CompilerContext {
        self.context
    }

    /// Look up a definition in the input document set by name.
    pub fn lookup(&self, name: &str) -> Option<&'ctx Definition> {
        self.context.get(name)
    }

    /// Dispatch `definition` to the matching handler on `transformer`.
    pub fn visit_definition<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        definition: &Definition,
        state: &mut T::State,
    ) -> Result<Definition, T::Error> {
        Ok(match definition {
            Definition::Fragment(fragment) =>
                Definition::Fragment(transformer.visit_fragment(self, fragment, state)?),

            Definition::Root(root) =>
                Definition::Root(transformer.visit_root(self, root, state)?),
        })
    }

    /// Dispatch `selection` to the matching handler on `transformer`.
    pub fn visit_selection<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        selection: &Selection,
        state: &mut T::State,
    ) -> Result<Selection, T::Error> {
        match selection {
            Selection::Condition(condition) =>
                transformer.visit_condition(self, condition, state),

            Selection::FragmentSpread(spread) =>
                transformer.visit_fragment_spread(self, spread, state),

            Selection::InlineFragment(inline) =>
                transformer.visit_inline_fragment(self, inline, state),

            Selection::LinkedField(field) =>
                transformer.visit_linked_field(self, field, state),

            Selection::ScalarField(field) =>
                transformer.visit_scalar_field(self, field, state),
        }
    }

    /// Visit each selection in order, depth-first.
    pub fn traverse_selections<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        selections: &[Selection],
        state: &mut T::State,
    ) -> Result<Vec<Selection>, T::Error> {
        selections.iter()
            .map(|selection| self.visit_selection(transformer, selection, state))
            .collect()
    }

    pub fn traverse_root<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        root: &Root,
        state: &mut T::State,
    ) -> Result<Root, T::Error> {
        Ok(Root {
            argument_definitions: root.argument_definitions.clone(),
            directives: root.directives.clone(),
            name: root.name.clone(),
            operation: root.operation,
            selections: self.traverse_selections(transformer, &root.selections, state)?,
            type_: root.type_.clone(),
        })
    }

    pub fn traverse_fragment<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        fragment: &Fragment,
        state: &mut T::State,
    ) -> Result<Fragment, T::Error> {
        Ok(Fragment {
            argument_definitions: fragment.argument_definitions.clone(),
            directives: fragment.directives.clone(),
            metadata: fragment.metadata.clone(),
            name: fragment.name.clone(),
            selections: self.traverse_selections(transformer, &fragment.selections, state)?,
            type_condition: fragment.type_condition.clone(),
        })
    }

    pub fn traverse_condition<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        condition: &Condition,
        state: &mut T::State,
    ) -> Result<Condition, T::Error> {
        Ok(Condition {
            condition: condition.condition.clone(),
            passing_value: condition.passing_value,
            selections: self.traverse_selections(transformer, &condition.selections, state)?,
        })
    }

    pub fn traverse_inline_fragment<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        inline_fragment: &InlineFragment,
        state: &mut T::State,
    ) -> Result<InlineFragment, T::Error> {
        Ok(InlineFragment {
            directives: inline_fragment.directives.clone(),
            metadata: inline_fragment.metadata.clone(),
            selections: self.traverse_selections(
                transformer,
                &inline_fragment.selections,
                state,
            )?,
            type_condition: inline_fragment.type_condition.clone(),
        })
    }

    pub fn traverse_linked_field<T: IrTransformer + ?Sized>(
        &self,
        transformer: &T,
        field: &LinkedField,
        state: &mut T::State,
    ) -> Result<LinkedField, T::Error> {
        Ok(LinkedField {
            alias: field.alias.clone(),
            args: field.args.clone(),
            directives: field.directives.clone(),
            metadata: field.metadata.clone(),
            name: field.name.clone(),
            selections: self.traverse_selections(transformer, &field.selections, state)?,
            type_: field.type_.clone(),
        })
    }
}

/// Run `transformer` over every definition in `context`, in order, and
/// collect the results into a new [`CompilerContext`].
///
/// `state_factory` is called once per top-level definition. The first
/// error aborts the whole transform; no partially transformed context is
/// ever returned.
pub fn transform<T, F>(
    context: &CompilerContext,
    transformer: &T,
    mut state_factory: F,
) -> Result<CompilerContext, T::Error>
where
    T: IrTransformer + ?Sized,
    F: FnMut() -> T::State,
{
    let traversal = Traversal::new(context);
    let mut transformed = CompilerContext::new();
    for definition in context.definitions() {
        log::trace!("Transforming definition `{}`.", definition.name());
        let mut state = state_factory();
        let definition = traversal.visit_definition(transformer, definition, &mut state)?;
        transformed.add(definition)?;
    }
    Ok(transformed)
}
