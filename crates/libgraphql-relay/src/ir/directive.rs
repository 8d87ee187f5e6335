use crate::ir::Argument;
use crate::ir::Value;
use indexmap::IndexMap;

/// A directive annotation (e.g. `@relay(mask: false)`) placed on a node.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub args: Vec<Argument>,
    pub name: String,
}
impl Directive {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            args,
            name: name.into(),
        }
    }

    /// Find the argument passed to this directive with the given name.
    pub fn arg(&self, name: &str) -> Option<&Argument> {
        self.args.iter().find(|arg| arg.name == name)
    }

    /// A map from argument name -> literal [`Value`] for every argument
    /// passed to this directive. Arguments bound to a variable map to
    /// `None`.
    ///
    /// Entries retain the order in which arguments were passed.
    pub fn literal_argument_values(&self) -> IndexMap<&str, Option<&Value>> {
        self.args.iter()
            .map(|arg| (arg.name(), arg.literal_value()))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Find the first directive in `directives` with the given name.
pub fn find_directive<'a>(
    directives: &'a [Directive],
    name: &str,
) -> Option<&'a Directive> {
    directives.iter().find(|directive| directive.name == name)
}
