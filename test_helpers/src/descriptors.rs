//! Builders for the declaration shapes exercised across the test suites.
//!
//! ```
//! use quickctor_test_helpers::descriptors::{chain, read_only_field};
//!
//! let child = chain(&[("Grandparent", "_x"), ("Parent", "_y"), ("Child", "_z")]);
//! assert_eq!(child.name, "Child");
//! assert_eq!(child.base.as_ref().map(|b| b.name.as_str()), Some("Parent"));
//! # let _ = read_only_field("_x", "int");
//! ```

use quickctor::{
    Configuration, MemberDescriptor, NullCheckMode, ParameterOverride, TypeDescriptor, TypeRef,
};

/// A read-only field of value type `ty`.
#[must_use]
pub fn read_only_field(name: &str, ty: &str) -> MemberDescriptor {
    MemberDescriptor::field(name, TypeRef::value(ty)).read_only()
}

/// A read-only field of non-nullable reference type `ty`.
#[must_use]
pub fn read_only_reference(name: &str, ty: &str) -> MemberDescriptor {
    MemberDescriptor::field(name, TypeRef::reference(ty)).read_only()
}

/// A getter-only auto-property of value type `ty`.
#[must_use]
pub fn auto_property(name: &str, ty: &str) -> MemberDescriptor {
    MemberDescriptor::property(name, TypeRef::value(ty))
        .auto_backed()
        .read_only()
}

/// A read-only field renamed through an override.
#[must_use]
pub fn renamed_field(name: &str, ty: &str, parameter: &str) -> MemberDescriptor {
    read_only_field(name, ty).with_override(ParameterOverride::named(parameter))
}

/// A marked class in `TestNamespace` with default options.
#[must_use]
pub fn marked_class(name: &str) -> TypeDescriptor {
    TypeDescriptor::new(name)
        .in_namespace("TestNamespace")
        .at(format!("{name}.cs"), 1, 1)
        .marked(Configuration::default())
}

/// A marked class using `mode` for null guards.
#[must_use]
pub fn marked_with_null_checks(name: &str, mode: NullCheckMode) -> TypeDescriptor {
    marked_class(name).marked(Configuration {
        null_checks: mode,
        ..Configuration::default()
    })
}

/// Builds an inheritance chain from `(type name, field name)` pairs listed
/// root first; every type is marked and declares one read-only `int` field.
/// Returns the most derived type.
///
/// # Panics
///
/// Panics when `links` is empty.
#[must_use]
pub fn chain(links: &[(&str, &str)]) -> TypeDescriptor {
    let mut descriptors = links
        .iter()
        .map(|(name, field)| marked_class(name).with_member(read_only_field(field, "int")));
    let root = descriptors
        .next()
        .unwrap_or_else(|| panic!("an inheritance chain needs at least one type"));
    descriptors.fold(root, |base, derived| derived.with_base(base))
}
