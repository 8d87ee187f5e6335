use crate::ir::Definition;
use crate::ir::Fragment;
use crate::ir::Root;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, CompilerContextError>;

/// An immutable-by-convention set of [`Definition`]s, keyed by name.
///
/// Roots and fragments share a single namespace. Definitions are kept in the
/// order they were added so that passes produce deterministic output.
///
/// # Example
///
/// ```
/// use libgraphql_relay::CompilerContext;
/// use libgraphql_relay::ir::Fragment;
///
/// let context = CompilerContext::from_definitions([
///     Fragment::new("UserFields", "User").into(),
///     Fragment::new("PostFields", "Post").into(),
/// ]).unwrap();
///
/// assert_eq!(context.len(), 2);
/// assert!(context.get_fragment("UserFields").is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilerContext {
    definitions: IndexMap<String, Definition>,
}

impl CompilerContext {
    pub fn new() -> Self {
        Self {
            definitions: IndexMap::new(),
        }
    }

    /// Build a context from a sequence of definitions.
    ///
    /// Returns an error for the first definition whose name is already taken.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = Definition>,
    ) -> Result<Self> {
        let mut context = Self::new();
        for definition in definitions {
            context.add(definition)?;
        }
        Ok(context)
    }

    /// Add a definition after any previously added definitions.
    pub fn add(&mut self, definition: Definition) -> Result<()> {
        let name = definition.name().to_string();
        if let Some(existing) = self.definitions.get(&name) {
            return Err(CompilerContextError::DuplicateDefinition {
                definition_name: name,
                existing_kind: definition_kind_name(existing),
                new_kind: definition_kind_name(&definition),
            });
        }
        self.definitions.insert(name, definition);
        Ok(())
    }

    /// All definitions in the order they were added.
    pub fn definitions(&self) -> impl ExactSizeIterator<Item = &Definition> {
        self.definitions.values()
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    pub fn get_fragment(&self, name: &str) -> Option<&Fragment> {
        self.get(name).and_then(Definition::as_fragment)
    }

    pub fn get_root(&self, name: &str) -> Option<&Root> {
        self.get(name).and_then(Definition::as_root)
    }

    pub fn into_definitions(self) -> Vec<Definition> {
        self.definitions.into_values().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
}

fn definition_kind_name(definition: &Definition) -> &'static str {
    match definition {
        Definition::Fragment(_) => "fragment",
        Definition::Root(_) => "operation",
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompilerContextError {
    #[error(
        "Duplicate definition for `{definition_name}`: a {existing_kind} \
        with this name was already added before this {new_kind}."
    )]
    DuplicateDefinition {
        definition_name: String,
        existing_kind: &'static str,
        new_kind: &'static str,
    },
}
