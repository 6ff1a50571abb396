//! End-to-end tests for the `quickctor` binary.

mod common;

use anyhow::Result;
use quickctor::{Configuration, NullCheckMode, TypeDescriptor};
use rstest::rstest;
use test_helpers::descriptors::{chain, marked_class, read_only_field, read_only_reference};
use test_helpers::text::{constructor_body, lf};

use common::{Workspace, stderr};

#[test]
fn writes_one_file_per_marked_type() -> Result<()> {
    let workspace = Workspace::with_manifest(&[
        marked_class("TestClass").with_member(read_only_reference("_name", "string")),
        marked_class("TestClass").in_namespace("Other"),
        TypeDescriptor::new("Unmarked"),
    ])?;
    let output = workspace.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let first = workspace.read("generated/TestClass.cs")?;
    assert!(first.contains("namespace TestNamespace\n"));
    assert_eq!(
        constructor_body(&first, "public TestClass("),
        Some(vec![
            "if (@name == null)".to_owned(),
            "throw new global::System.ArgumentNullException(nameof(@name));".to_owned(),
            "this.@_name = @name;".to_owned(),
        ])
    );
    let second = workspace.read("generated/TestClass2.cs")?;
    assert!(second.contains("namespace Other\n"));
    assert!(!workspace.root.join("generated/Unmarked.cs").exists());
    Ok(())
}

#[test]
fn inheritance_chain_generates_forwarding_constructors() -> Result<()> {
    let child = chain(&[("Grandparent", "_x"), ("Parent", "_y"), ("Child", "_z")]);
    let workspace = Workspace::with_manifest(&[child])?;
    let output = workspace.run(&["--out-dir", "out"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let source = workspace.read("out/Child.cs")?;
    assert!(source.contains(": base(@x, @y)\n"));
    Ok(())
}

#[test]
fn diagnostics_fail_the_run_and_write_nothing() -> Result<()> {
    let workspace = Workspace::with_manifest(&[
        marked_class("Clash")
            .at("src/Clash.cs", 7, 18)
            .with_member(read_only_field("value", "int"))
            .with_member(read_only_field("_value", "int")),
        marked_class("Fine").with_member(read_only_field("_ok", "int")),
    ])?;
    let output = workspace.run(&["--report", "report.json"])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains(
        "src/Clash.cs:7:18: error QC0001: The parameter 'value' is duplicated in the generated constructor for 'Clash'."
    ));
    assert!(!workspace.root.join("generated/Clash.cs").exists());
    assert!(workspace.root.join("generated/Fine.cs").exists());

    let report: serde_json::Value = serde_json::from_str(&workspace.read("report.json")?)?;
    assert_eq!(report[0]["code"], "QC0001");
    assert_eq!(report[0]["type_name"], "Clash");
    assert_eq!(report[0]["location"]["line"], 7);
    Ok(())
}

#[test]
fn check_mode_writes_no_files() -> Result<()> {
    let workspace = Workspace::with_manifest(&[marked_class("Checked")])?;
    let output = workspace.run(&["--check"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!workspace.root.join("generated").exists());
    Ok(())
}

#[rstest]
#[case::file("indent_width = 2\nline_ending = \"crlf\"\n", &[], "\r\n  partial class Styled\r\n")]
#[case::flag_extension("", &["--extension", "g.cs"], "partial class Styled\n")]
fn settings_shape_output(
    #[case] settings: &str,
    #[case] args: &[&str],
    #[case] fragment: &str,
) -> Result<()> {
    let workspace = Workspace::with_manifest(&[marked_class("Styled")])?;
    workspace.write("quickctor.toml", settings)?;
    let output = workspace.run(args)?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let file = if args.is_empty() {
        "generated/Styled.cs"
    } else {
        "generated/Styled.g.cs"
    };
    assert!(workspace.read(file)?.contains(fragment));
    Ok(())
}

#[test]
fn environment_overrides_settings_file() -> Result<()> {
    let workspace = Workspace::with_manifest(&[marked_class("Env")])?;
    workspace.write("quickctor.toml", "out_dir = \"from-file\"\n")?;
    let output = std::process::Command::new(common::quickctor_exe()?)
        .current_dir(&workspace.root)
        .env("QUICKCTOR_OUT_DIR", "from-env")
        .args(["--input", "types.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(workspace.root.join("from-env/Env.cs").exists());
    assert!(!workspace.root.join("from-file").exists());
    Ok(())
}

#[test]
fn null_check_mode_from_manifest_is_honoured() -> Result<()> {
    let ty = marked_class("Unchecked")
        .with_member(read_only_reference("_name", "string"))
        .marked(Configuration {
            null_checks: NullCheckMode::Never,
            ..Configuration::default()
        });
    let workspace = Workspace::with_manifest(&[ty])?;
    let output = workspace.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let source = lf(&workspace.read("generated/Unchecked.cs")?);
    assert!(!source.contains("ArgumentNullException"));
    Ok(())
}

#[test]
fn unsupported_schema_version_is_rejected() -> Result<()> {
    let workspace = Workspace::with_manifest(&[])?;
    workspace.write("types.json", r#"{"version": "0.1", "types": []}"#)?;
    let output = workspace.run(&[])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("SchemaVersion"));
    Ok(())
}
