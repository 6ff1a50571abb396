//! Input descriptors supplied by the host for each candidate declaration.
//!
//! Descriptors are plain serde values. The host resolves attribute usage,
//! nullability and accessibility before handing them over; synthesis only
//! reads them.

mod config;
mod member;

use serde::{Deserialize, Serialize};

pub use config::{
    Accessibility, Configuration, DEFAULT_DOCUMENTATION, FieldPolicy, NullCheckMode,
    PropertyPolicy,
};
pub use member::{
    AttributeTarget, CopyableAttribute, MemberDescriptor, MemberFlags, MemberKind, Nullability,
    ParameterOverride, TypeRef,
};

/// Version of the descriptor format understood by this crate.
pub const DESCRIPTOR_SCHEMA_VERSION: &str = "1.0";

/// Declaration form of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `class`
    #[default]
    Class,
    /// `struct`
    Struct,
    /// `record`
    Record,
    /// `record struct`
    RecordStruct,
}

impl TypeKind {
    /// Returns the declaration keyword used in partial wrappers.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
        }
    }
}

/// Location of a declaration in the host's sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Source file path as reported by the host.
    pub path: String,
    /// One-based line.
    pub line: u32,
    /// One-based column.
    pub column: u32,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

/// A type that lexically encloses a nested declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainingType {
    /// Simple name.
    pub name: String,
    /// Declaration form.
    #[serde(default)]
    pub kind: TypeKind,
    /// Generic type parameter names.
    #[serde(default)]
    pub type_parameters: Vec<String>,
}

impl ContainingType {
    /// A non-generic container of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_parameters: Vec::new(),
        }
    }

    /// Name with type parameters in angle brackets.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(&self.name, &self.type_parameters)
    }
}

/// A class, struct or record declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Simple name without type parameters.
    pub name: String,
    /// Declaration form.
    #[serde(default)]
    pub kind: TypeKind,
    /// Generic type parameter names.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Enclosing namespace; `None` for the global namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Enclosing types, outermost first.
    #[serde(default)]
    pub containing_types: Vec<ContainingType>,
    /// Declaration location used for diagnostics.
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Base type, absent for root types.
    #[serde(default)]
    pub base: Option<Box<Self>>,
    /// Whether the type exposes an accessible zero-argument constructor.
    #[serde(default)]
    pub has_accessible_parameterless_constructor: bool,
    /// Fields and properties in declaration order.
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
    /// Marker options; `None` when the type does not carry the marker.
    #[serde(default)]
    pub marker: Option<Configuration>,
}

impl TypeDescriptor {
    /// An unmarked class with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            type_parameters: Vec::new(),
            namespace: None,
            containing_types: Vec::new(),
            location: None,
            base: None,
            has_accessible_parameterless_constructor: false,
            members: Vec::new(),
            marker: None,
        }
    }

    /// Name with type parameters in angle brackets, e.g. `Box<T>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(&self.name, &self.type_parameters)
    }

    /// Name with type parameters in documentation cross-reference form,
    /// e.g. `Box{T}`.
    #[must_use]
    pub fn cref_name(&self) -> String {
        cref_name(&self.name, &self.type_parameters)
    }

    /// Returns `true` when the declaration carries the marker.
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marker.is_some()
    }

    /// Sets the declaration form.
    #[must_use]
    pub const fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the enclosing namespace.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Appends a generic type parameter.
    #[must_use]
    pub fn with_type_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.type_parameters.push(parameter.into());
        self
    }

    /// Appends an enclosing type; call outermost first.
    #[must_use]
    pub fn nested_in(mut self, container: ContainingType) -> Self {
        self.containing_types.push(container);
        self
    }

    /// Sets the declaration location.
    #[must_use]
    pub fn at(mut self, path: impl Into<String>, line: u32, column: u32) -> Self {
        self.location = Some(SourceLocation {
            path: path.into(),
            line,
            column,
        });
        self
    }

    /// Sets the base type.
    #[must_use]
    pub fn with_base(mut self, base: Self) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    /// Declares an accessible zero-argument constructor.
    #[must_use]
    pub const fn with_parameterless_constructor(mut self) -> Self {
        self.has_accessible_parameterless_constructor = true;
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Attaches the marker with the given options.
    #[must_use]
    pub fn marked(mut self, configuration: Configuration) -> Self {
        self.marker = Some(configuration);
        self
    }
}

pub(crate) fn display_name(name: &str, type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        name.to_owned()
    } else {
        format!("{name}<{}>", type_parameters.join(", "))
    }
}

pub(crate) fn cref_name(name: &str, type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        name.to_owned()
    } else {
        format!("{name}{{{}}}", type_parameters.join(", "))
    }
}
