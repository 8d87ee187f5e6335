use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The declared type of an argument, argument definition or field, e.g.
/// `ID!` or `[String]`.
///
/// Serialized as its GraphQL type-syntax string so that IR documents read
/// the same way the source documents do.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable,
        })
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable,
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Named(named_annot) => named_annot.to_graphql_string(),
            Self::List(list_annot) => list_annot.to_graphql_string(),
        }
    }

    fn parse_impl(
        source: &str,
        annot_str: &str,
    ) -> Result<Self, TypeAnnotationParseError> {
        let (annot_str, nullable) = match annot_str.strip_suffix('!') {
            Some(inner) => (inner.trim_end(), false),
            None => (annot_str, true),
        };

        if let Some(list_body) = annot_str.strip_prefix('[') {
            let inner_str = list_body.strip_suffix(']').ok_or_else(||
                TypeAnnotationParseError::UnclosedListType(source.to_string())
            )?;
            let inner = Self::parse_impl(source, inner_str.trim())?;
            return Ok(Self::list(inner, nullable));
        }

        if !is_valid_name(annot_str) {
            return Err(TypeAnnotationParseError::InvalidTypeName {
                annotation: source.to_string(),
                type_name: annot_str.to_string(),
            });
        }

        Ok(Self::named(annot_str, nullable))
    }
}
impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl FromStr for TypeAnnotation {
    type Err = TypeAnnotationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_impl(s, s.trim())
    }
}
impl TryFrom<String> for TypeAnnotation {
    type Error = TypeAnnotationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<TypeAnnotation> for String {
    fn from(annot: TypeAnnotation) -> Self {
        annot.to_graphql_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "[{}]{}",
            self.inner_type.to_graphql_string(),
            if self.nullable { "" } else { "!" },
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTypeAnnotation {
    pub(crate) name: String,
    pub(crate) nullable: bool,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "{}{}",
            self.name,
            if self.nullable { "" } else { "!" },
        )
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeAnnotationParseError {
    #[error(
        "Invalid type name `{type_name}` in type annotation `{annotation}`."
    )]
    InvalidTypeName {
        annotation: String,
        type_name: String,
    },

    #[error("List type annotation `{0}` is missing its closing `]`.")]
    UnclosedListType(String),
}
