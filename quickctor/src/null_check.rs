//! Null guard policy.

use crate::model::{NullCheckMode, Nullability, TypeRef};

/// Decides whether a parameter of type `ty` receives a null guard.
///
/// Value types are never guarded. Under
/// [`NullCheckMode::NonNullableReferencesOnly`] only references annotated as
/// non-nullable are guarded; oblivious types are left alone.
#[must_use]
pub fn should_check(ty: &TypeRef, mode: NullCheckMode) -> bool {
    match mode {
        NullCheckMode::Never => false,
        NullCheckMode::Always => !ty.is_value_type,
        NullCheckMode::NonNullableReferencesOnly => {
            !ty.is_value_type && ty.nullability == Nullability::NotAnnotated
        }
    }
}
