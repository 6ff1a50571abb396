//! Member selection: which members of a type become constructor parameters.

use tracing::trace;

use crate::descriptor::{ConstructorParameter, NameOrigin};
use crate::ident;
use crate::model::{
    Configuration, FieldPolicy, MemberDescriptor, MemberKind, PropertyPolicy, TypeDescriptor,
};
use crate::null_check::should_check;

/// Why a member was left out of the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exclusion {
    Implicit,
    Static,
    Initializer,
    NotAutoBacked,
    Policy,
}

/// Selects the members of `ty` that become parameters under `config`.
///
/// Fields come first, then properties, each in declaration order. An
/// explicit override forces inclusion but never revives an implicit, static
/// or initialized member. Selection never fails; an empty list is a valid
/// result.
#[must_use]
pub fn select(ty: &TypeDescriptor, config: &Configuration) -> Vec<ConstructorParameter> {
    let (fields, properties): (Vec<_>, Vec<_>) = ty
        .members
        .iter()
        .filter(|member| is_selected(ty, member, config))
        .partition(|member| member.kind == MemberKind::Field);

    fields
        .into_iter()
        .chain(properties)
        .map(|member| to_parameter(member, config))
        .collect()
}

fn is_selected(ty: &TypeDescriptor, member: &MemberDescriptor, config: &Configuration) -> bool {
    match exclusion(member, config) {
        Some(reason) => {
            trace!(
                type_name = %ty.name,
                member = %member.name,
                ?reason,
                "member excluded from constructor"
            );
            false
        }
        None => true,
    }
}

fn exclusion(member: &MemberDescriptor, config: &Configuration) -> Option<Exclusion> {
    let flags = &member.flags;
    let overridden = member.parameter.is_some();
    if flags.is_implicit {
        return Some(Exclusion::Implicit);
    }
    if flags.is_static {
        return Some(Exclusion::Static);
    }
    if flags.has_initializer {
        return Some(Exclusion::Initializer);
    }
    if overridden {
        return None;
    }
    let admitted = match member.kind {
        MemberKind::Field => match config.fields {
            FieldPolicy::ReadOnly => flags.is_read_only,
            FieldPolicy::All => true,
        },
        MemberKind::Property => {
            if !flags.is_auto_backed {
                return Some(Exclusion::NotAutoBacked);
            }
            match config.properties {
                PropertyPolicy::None => false,
                PropertyPolicy::ReadOnly => flags.is_read_only,
                PropertyPolicy::All => true,
            }
        }
    };
    (!admitted).then_some(Exclusion::Policy)
}

fn to_parameter(member: &MemberDescriptor, config: &Configuration) -> ConstructorParameter {
    let explicit = member
        .parameter
        .as_ref()
        .and_then(|parameter| parameter.name.as_deref());
    let (name, origin) = match explicit {
        Some(raw) => (
            ident::strip_escape(raw).to_owned(),
            NameOrigin::Override {
                raw: raw.to_owned(),
            },
        ),
        None => (ident::derive(&member.name), NameOrigin::Derived),
    };
    let copy_attributes = member
        .parameter
        .as_ref()
        .is_none_or(|parameter| parameter.include_attributes);
    let attributes = if copy_attributes {
        member
            .attributes
            .iter()
            .filter(|attribute| attribute.applies_to_parameter())
            .map(|attribute| attribute.text.clone())
            .collect()
    } else {
        Vec::new()
    };

    ConstructorParameter {
        name,
        ty: member.ty.clone(),
        null_check: should_check(&member.ty, config.null_checks),
        target: member
            .name
            .strip_prefix('@')
            .unwrap_or(&member.name)
            .to_owned(),
        attributes,
        origin,
    }
}
