//! Constructor synthesis for annotated type declarations.
//!
//! A host describes each declaration carrying the marker as a
//! [`TypeDescriptor`]. Synthesis selects the members that become parameters,
//! walks the base chain, rejects conflicting or invalid names and renders a
//! partial declaration containing the constructor.
//!
//! ```
//! use quickctor::{
//!     Configuration, MemberDescriptor, RenderOptions, TypeDescriptor, TypeRef, synthesize,
//! };
//!
//! let ty = TypeDescriptor::new("Point")
//!     .in_namespace("Geometry")
//!     .with_member(MemberDescriptor::field("_x", TypeRef::value("int")).read_only())
//!     .marked(Configuration::default());
//! let generated = synthesize(&ty, &RenderOptions::default()).expect("synthesis succeeds");
//! assert!(generated.source.contains("this.@_x = @x;"));
//! ```
//!
//! The crate performs no I/O and holds no shared state; requests may be
//! evaluated in parallel.

pub mod conflict;
pub mod descriptor;
pub mod diagnostic;
pub mod ident;
pub mod inherit;
pub mod model;
pub mod null_check;
pub mod render;
pub mod select;

pub use descriptor::{ConstructorDescriptor, ConstructorParameter, NameOrigin, TypeIdentity};
pub use diagnostic::{Diagnostic, DiagnosticCode, SynthesisError};
pub use inherit::resolve;
pub use model::{
    Accessibility, AttributeTarget, Configuration, ContainingType, CopyableAttribute,
    DESCRIPTOR_SCHEMA_VERSION, FieldPolicy, MemberDescriptor, MemberFlags, MemberKind,
    NullCheckMode, Nullability, ParameterOverride, PropertyPolicy, SourceLocation, TypeDescriptor,
    TypeKind, TypeRef,
};
pub use render::{LineEnding, RenderOptions, normalize, render};

/// A successfully synthesized constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConstructor {
    /// The resolved descriptor.
    pub descriptor: ConstructorDescriptor,
    /// The rendered source file.
    pub source: String,
}

/// Resolves and renders the constructor for `ty`.
///
/// # Errors
///
/// Returns the [`SynthesisError`] produced by [`resolve`]; no source is
/// rendered in that case.
pub fn synthesize(
    ty: &TypeDescriptor,
    options: &RenderOptions,
) -> Result<GeneratedConstructor, SynthesisError> {
    let descriptor = resolve(ty)?;
    let source = render(&descriptor, options);
    Ok(GeneratedConstructor { descriptor, source })
}
