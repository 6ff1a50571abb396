//! Member descriptors: the fields and properties a constructor may assign.

use serde::{Deserialize, Serialize};

/// Whether a member is a field or a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A field.
    Field,
    /// A property.
    Property,
}

/// Nullable annotation state of a type reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nullability {
    /// Annotated as non-nullable.
    NotAnnotated,
    /// Annotated as nullable (for example `string?`).
    Annotated,
    /// No nullability information is available.
    #[default]
    Oblivious,
}

/// Semantic type of a member as classified by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully qualified type text emitted in the parameter list.
    pub display: String,
    /// `true` for value types, which never receive null guards.
    #[serde(default)]
    pub is_value_type: bool,
    /// Nullable annotation of the type.
    #[serde(default)]
    pub nullability: Nullability,
}

impl TypeRef {
    /// A value type such as `int`.
    #[must_use]
    pub fn value(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            is_value_type: true,
            nullability: Nullability::NotAnnotated,
        }
    }

    /// A reference type annotated as non-nullable.
    #[must_use]
    pub fn reference(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            is_value_type: false,
            nullability: Nullability::NotAnnotated,
        }
    }

    /// A reference type annotated as nullable.
    #[must_use]
    pub fn nullable_reference(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            is_value_type: false,
            nullability: Nullability::Annotated,
        }
    }

    /// A type with no nullability information, such as an unconstrained
    /// generic parameter.
    #[must_use]
    pub fn oblivious(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            is_value_type: false,
            nullability: Nullability::Oblivious,
        }
    }
}

/// Declaration facts used to decide whether a member is eligible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberFlags {
    /// Declared `static`.
    pub is_static: bool,
    /// Read-only field or getter-only property.
    pub is_read_only: bool,
    /// Carries an initializer expression.
    pub has_initializer: bool,
    /// Property without user-written accessor bodies.
    pub is_auto_backed: bool,
    /// Compiler-synthesized and not referenceable by name.
    pub is_implicit: bool,
}

/// Per-member override carried by the parameter annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterOverride {
    /// Explicit parameter name, possibly with `@` escape prefixes.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether source attributes are copied onto the parameter.
    #[serde(default = "default_include_attributes")]
    pub include_attributes: bool,
}

const fn default_include_attributes() -> bool {
    true
}

impl Default for ParameterOverride {
    fn default() -> Self {
        Self {
            name: None,
            include_attributes: true,
        }
    }
}

impl ParameterOverride {
    /// An override that renames the parameter.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Declared usage target of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeTarget {
    /// Field declarations.
    Field,
    /// Property declarations.
    Property,
    /// Method and constructor parameters.
    Parameter,
    /// Return values.
    ReturnValue,
    /// Any other target kind.
    Other,
}

/// An attribute applied to a member, in source text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyableAttribute {
    /// Attribute text without the surrounding brackets.
    pub text: String,
    /// Targets declared by the attribute's usage metadata.
    #[serde(default)]
    pub targets: Vec<AttributeTarget>,
}

impl CopyableAttribute {
    /// Builds an attribute from its text and declared targets.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        targets: impl IntoIterator<Item = AttributeTarget>,
    ) -> Self {
        Self {
            text: text.into(),
            targets: targets.into_iter().collect(),
        }
    }

    /// Returns `true` when the attribute may be applied to a parameter.
    #[must_use]
    pub fn applies_to_parameter(&self) -> bool {
        self.targets.contains(&AttributeTarget::Parameter)
    }
}

/// A field or property declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Declared member name.
    pub name: String,
    /// Field or property.
    pub kind: MemberKind,
    /// Semantic type of the member.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Declaration flags.
    #[serde(default)]
    pub flags: MemberFlags,
    /// Optional parameter annotation.
    #[serde(default)]
    pub parameter: Option<ParameterOverride>,
    /// Attributes declared on the member.
    #[serde(default)]
    pub attributes: Vec<CopyableAttribute>,
}

impl MemberDescriptor {
    /// A field with default flags.
    #[must_use]
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Field, ty)
    }

    /// A property with default flags.
    #[must_use]
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Property, ty)
    }

    fn new(name: impl Into<String>, kind: MemberKind, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            flags: MemberFlags::default(),
            parameter: None,
            attributes: Vec::new(),
        }
    }

    /// Marks the member read-only.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.flags.is_read_only = true;
        self
    }

    /// Marks the property as automatically backed.
    #[must_use]
    pub const fn auto_backed(mut self) -> Self {
        self.flags.is_auto_backed = true;
        self
    }

    /// Replaces the declaration flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attaches a parameter override.
    #[must_use]
    pub fn with_override(mut self, parameter: ParameterOverride) -> Self {
        self.parameter = Some(parameter);
        self
    }

    /// Appends a declared attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: CopyableAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}
