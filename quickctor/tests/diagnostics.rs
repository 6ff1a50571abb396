//! Naming diagnostics and their reporting shape.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected synthesis failures"
)]

use quickctor::{
    Configuration, DiagnosticCode, MemberDescriptor, ParameterOverride, PropertyPolicy,
    RenderOptions, TypeDescriptor, TypeRef, resolve, synthesize,
};
use rstest::rstest;
use test_helpers::descriptors::{auto_property, marked_class, read_only_field, renamed_field};

#[test]
fn field_and_property_deriving_same_name_conflict_once() {
    let ty = marked_class("Clash")
        .with_member(read_only_field("value", "int"))
        .with_member(auto_property("Value", "int"));
    let error = synthesize(&ty, &RenderOptions::default()).expect_err("duplicate rejected");
    let diagnostic = error.diagnostic().expect("reported on the type");
    assert_eq!(diagnostic.code, DiagnosticCode::DuplicateParameter);
    assert_eq!(diagnostic.arguments, ["value", "Clash"]);
    assert_eq!(
        diagnostic.to_string(),
        "QC0001: The parameter 'value' is duplicated in the generated constructor for 'Clash'."
    );
}

#[test]
fn first_duplicated_name_is_reported() {
    let ty = marked_class("Many")
        .with_member(read_only_field("_b", "int"))
        .with_member(read_only_field("_a", "int"))
        .with_member(renamed_field("_other", "int", "a"))
        .with_member(renamed_field("_another", "int", "b"));
    let error = resolve(&ty).expect_err("duplicates rejected");
    assert_eq!(
        error.diagnostic().map(|d| d.arguments.clone()),
        Some(vec!["b".to_owned(), "Many".to_owned()])
    );
}

#[test]
fn names_differing_only_in_case_do_not_conflict() {
    let ty = marked_class("Cased")
        .with_member(renamed_field("_lower", "int", "value"))
        .with_member(renamed_field("_upper", "int", "Value"));
    let resolved = resolve(&ty).expect("ordinal comparison");
    assert_eq!(resolved.parameter_names(), ["value", "Value"]);
}

#[test]
fn excluded_duplicate_does_not_conflict() {
    let ty = marked_class("Narrowed")
        .with_member(read_only_field("value", "int"))
        .with_member(auto_property("Value", "int"))
        .marked(Configuration {
            properties: PropertyPolicy::None,
            ..Configuration::default()
        });
    let resolved = resolve(&ty).expect("property excluded by policy");
    assert_eq!(resolved.parameter_names(), ["value"]);
}

#[rstest]
#[case::leading_digit("1value")]
#[case::dollar("a$")]
#[case::bang("!a")]
#[case::empty("")]
#[case::space("with space")]
fn invalid_override_names_are_reported(#[case] raw: &str) {
    let ty = marked_class("Invalid").with_member(
        MemberDescriptor::property("Prop", TypeRef::reference("string"))
            .auto_backed()
            .with_override(ParameterOverride::named(raw)),
    );
    let error = synthesize(&ty, &RenderOptions::default()).expect_err("invalid name rejected");
    let diagnostic = error.diagnostic().expect("reported on the type");
    assert_eq!(diagnostic.code, DiagnosticCode::InvalidParameterName);
    assert_eq!(
        diagnostic.message(),
        format!("The parameter name '{raw}' used in 'Invalid' is not a valid identifier.")
    );
}

#[test]
fn diagnostics_serialize_with_stable_ids() {
    let ty = TypeDescriptor::new("Orphan")
        .at("src/Orphan.cs", 12, 7)
        .with_base(TypeDescriptor::new("Opaque"))
        .marked(Configuration::default());
    let error = resolve(&ty).expect_err("base must opt in");
    let diagnostic = error.diagnostic().expect("reported on the type");
    let json = serde_json::to_value(diagnostic).expect("serialize diagnostic");
    assert_eq!(json["code"], "QC0003");
    assert_eq!(json["arguments"][0], "Orphan");
    assert_eq!(json["location"]["path"], "src/Orphan.cs");
    assert_eq!(json["location"]["line"], 12);
}
