//! Inheritance resolution and constructor descriptor assembly.

use tracing::debug;

use crate::conflict;
use crate::descriptor::{ConstructorDescriptor, ConstructorParameter, NameOrigin, TypeIdentity};
use crate::diagnostic::{Diagnostic, DiagnosticCode, SynthesisError};
use crate::ident;
use crate::model::TypeDescriptor;
use crate::select::select;

/// Resolves the constructor for `ty`, walking its base chain first.
///
/// A type without the marker is resolved with the default options. Marked
/// ancestors contribute their parameters, root ancestor first. A failing
/// ancestor fails every descendant through [`SynthesisError::Ancestor`]
/// without a second diagnostic.
///
/// # Errors
///
/// Returns [`SynthesisError::Diagnostic`] when the base type neither opts in
/// nor has an accessible parameterless constructor, when an override name is
/// not a valid identifier, or when two parameters share a name.
pub fn resolve(ty: &TypeDescriptor) -> Result<ConstructorDescriptor, SynthesisError> {
    let config = ty.marker.clone().unwrap_or_default();
    let base_parameters = resolve_base(ty)?;
    let parameters = select(ty, &config);

    check_override_names(ty, &parameters)?;
    let merged = base_parameters
        .iter()
        .chain(&parameters)
        .map(|parameter| parameter.name.as_str());
    if let Some(found) = conflict::validate(merged) {
        debug!(
            type_name = %ty.name,
            parameter = %found.name,
            first = found.first,
            last = found.last,
            "duplicate constructor parameter"
        );
        return Err(failure(
            ty,
            DiagnosticCode::DuplicateParameter,
            [found.name, ty.display_name()],
        ));
    }

    debug!(
        type_name = %ty.name,
        inherited = base_parameters.len(),
        own = parameters.len(),
        "constructor resolved"
    );
    Ok(ConstructorDescriptor {
        identity: TypeIdentity::from(ty),
        accessibility: config.accessibility,
        parameters,
        base_parameters,
        documentation: config.documentation,
    })
}

fn resolve_base(ty: &TypeDescriptor) -> Result<Vec<ConstructorParameter>, SynthesisError> {
    let Some(base) = ty.base.as_deref() else {
        return Ok(Vec::new());
    };
    if base.is_marked() {
        return match resolve(base) {
            Ok(resolved) => {
                let mut inherited = resolved.base_parameters;
                inherited.extend(resolved.parameters);
                Ok(inherited)
            }
            Err(cause) => {
                debug!(type_name = %ty.name, base = %base.name, "base type failed synthesis");
                Err(SynthesisError::Ancestor {
                    ancestor: base.display_name(),
                    cause: Box::new(cause),
                })
            }
        };
    }
    if base.has_accessible_parameterless_constructor {
        debug!(
            type_name = %ty.name,
            base = %base.name,
            "base type has a parameterless constructor"
        );
        return Ok(Vec::new());
    }
    Err(failure(
        ty,
        DiagnosticCode::BaseTypeMustOptIn,
        [ty.display_name()],
    ))
}

fn check_override_names(
    ty: &TypeDescriptor,
    parameters: &[ConstructorParameter],
) -> Result<(), SynthesisError> {
    let invalid = parameters.iter().find_map(|parameter| match &parameter.origin {
        NameOrigin::Override { raw } if !ident::is_valid_identifier(&parameter.name) => {
            Some(raw.clone())
        }
        _ => None,
    });
    match invalid {
        Some(raw) => Err(failure(
            ty,
            DiagnosticCode::InvalidParameterName,
            [raw, ty.display_name()],
        )),
        None => Ok(()),
    }
}

fn failure<const N: usize>(
    ty: &TypeDescriptor,
    code: DiagnosticCode,
    arguments: [String; N],
) -> SynthesisError {
    let diagnostic = Diagnostic::new(code, arguments, ty.location.clone());
    debug!(type_name = %ty.name, code = %code, "synthesis failed");
    SynthesisError::Diagnostic(diagnostic)
}
