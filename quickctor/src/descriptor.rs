//! Resolved constructor descriptors handed to the renderer.

use serde::Serialize;

use crate::model::{
    self, Accessibility, ContainingType, SourceLocation, TypeDescriptor, TypeKind, TypeRef,
};

/// How a parameter obtained its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "origin")]
pub enum NameOrigin {
    /// Derived from the member name.
    Derived,
    /// Taken from an explicit override; `raw` keeps the name as written.
    Override {
        /// Override text before escape stripping.
        raw: String,
    },
}

/// A single parameter of the synthesized constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorParameter {
    /// Parameter identifier without the verbatim prefix.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Whether a null guard precedes the assignments.
    pub null_check: bool,
    /// Member name assigned from this parameter.
    pub target: String,
    /// Attribute texts emitted before the parameter.
    pub attributes: Vec<String>,
    /// Source of the parameter name.
    #[serde(flatten)]
    pub origin: NameOrigin,
}

/// Identity of the type that owns the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeIdentity {
    /// Simple name.
    pub name: String,
    /// Declaration form.
    pub kind: TypeKind,
    /// Generic type parameter names.
    pub type_parameters: Vec<String>,
    /// Enclosing namespace.
    pub namespace: Option<String>,
    /// Enclosing types, outermost first.
    pub containing_types: Vec<ContainingType>,
    /// Declaration location.
    pub location: Option<SourceLocation>,
}

impl TypeIdentity {
    /// Name with type parameters in angle brackets.
    #[must_use]
    pub fn display_name(&self) -> String {
        model::display_name(&self.name, &self.type_parameters)
    }

    /// Name in documentation cross-reference form.
    #[must_use]
    pub fn cref_name(&self) -> String {
        model::cref_name(&self.name, &self.type_parameters)
    }
}

impl From<&TypeDescriptor> for TypeIdentity {
    fn from(ty: &TypeDescriptor) -> Self {
        Self {
            name: ty.name.clone(),
            kind: ty.kind,
            type_parameters: ty.type_parameters.clone(),
            namespace: ty.namespace.clone(),
            containing_types: ty.containing_types.clone(),
            location: ty.location.clone(),
        }
    }
}

/// Everything the renderer needs to emit one constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorDescriptor {
    /// Owning type.
    pub identity: TypeIdentity,
    /// Constructor accessibility.
    pub accessibility: Accessibility,
    /// Parameters declared by the type itself.
    pub parameters: Vec<ConstructorParameter>,
    /// Parameters forwarded to the base constructor, root ancestor first.
    pub base_parameters: Vec<ConstructorParameter>,
    /// Documentation template; `None` disables the summary block.
    pub documentation: Option<String>,
}

impl ConstructorDescriptor {
    /// Every parameter in signature order: inherited first, then own.
    pub fn all_parameters(&self) -> impl Iterator<Item = &ConstructorParameter> {
        self.base_parameters.iter().chain(&self.parameters)
    }

    /// Parameter names in signature order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.all_parameters().map(|p| p.name.as_str()).collect()
    }
}
