//! Constructor rendering.
//!
//! [`render`] turns a resolved [`ConstructorDescriptor`] into a complete
//! source file: banner, nullable directive, namespace and partial wrappers
//! around the constructor itself. The output always passes through
//! [`normalize`], so rendering is deterministic for a given descriptor and
//! options.

mod escape;
mod format;
mod writer;

use serde::{Deserialize, Serialize};

use crate::descriptor::{ConstructorDescriptor, ConstructorParameter};
use escape::{verbatim, xml_text};
pub use format::normalize;
use writer::SourceWriter;

/// Line terminator used in generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    /// The terminator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Presentation options for generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Line terminator.
    pub line_ending: LineEnding,
    /// Emit `#nullable enable` after the banner.
    pub nullable_directive: bool,
    /// Generator name shown in the auto-generated banner.
    pub tool_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_ending: LineEnding::Lf,
            nullable_directive: true,
            tool_name: "QuickConstructor".to_owned(),
        }
    }
}

/// Renders the source file declaring the constructor in `descriptor`.
#[must_use]
pub fn render(descriptor: &ConstructorDescriptor, options: &RenderOptions) -> String {
    let mut out = SourceWriter::new(options.indent_width);
    banner(&mut out, options);

    let identity = &descriptor.identity;
    let mut depth = 0_usize;
    if let Some(namespace) = &identity.namespace {
        out.line(&format!("namespace {namespace}"));
        out.open_block();
        depth += 1;
    }
    for container in &identity.containing_types {
        out.line(&format!(
            "partial {} {}",
            container.kind.keyword(),
            container.display_name()
        ));
        out.open_block();
        depth += 1;
    }
    out.line(&format!(
        "partial {} {}",
        identity.kind.keyword(),
        identity.display_name()
    ));
    out.open_block();
    depth += 1;

    constructor(&mut out, descriptor);

    for _ in 0..depth {
        out.close_block();
    }
    normalize(&out.finish(), options.line_ending)
}

fn banner(out: &mut SourceWriter, options: &RenderOptions) {
    out.line("/// <auto-generated>");
    out.line(&format!(
        "/// This code was generated by the {} source generator.",
        options.tool_name
    ));
    out.line("/// </auto-generated>");
    out.blank();
    if options.nullable_directive {
        out.line("#nullable enable");
        out.blank();
    }
}

fn constructor(out: &mut SourceWriter, descriptor: &ConstructorDescriptor) {
    if let Some(template) = &descriptor.documentation {
        documentation(out, template, &descriptor.identity.cref_name());
    }
    signature(out, descriptor);

    if !descriptor.base_parameters.is_empty() {
        let forwarded: Vec<String> = descriptor
            .base_parameters
            .iter()
            .map(|parameter| verbatim(&parameter.name))
            .collect();
        out.indent();
        out.line(&format!(": base({})", forwarded.join(", ")));
        out.outdent();
    }

    out.open_block();
    for parameter in descriptor.parameters.iter().filter(|p| p.null_check) {
        let name = verbatim(&parameter.name);
        out.line(&format!("if ({name} == null)"));
        out.indent();
        out.line(&format!(
            "throw new global::System.ArgumentNullException(nameof({name}));"
        ));
        out.outdent();
        out.blank();
    }
    for parameter in &descriptor.parameters {
        out.line(&format!(
            "this.{} = {};",
            verbatim(&parameter.target),
            verbatim(&parameter.name)
        ));
    }
    out.close_block();
}

fn documentation(out: &mut SourceWriter, template: &str, cref: &str) {
    let reference = format!("<see cref=\"{cref}\" />");
    out.line("/// <summary>");
    for line in xml_text(template).replace("{0}", &reference).lines() {
        out.line(&format!("/// {line}"));
    }
    out.line("/// </summary>");
}

fn signature(out: &mut SourceWriter, descriptor: &ConstructorDescriptor) {
    let head = format!(
        "{} {}(",
        descriptor.accessibility.keyword(),
        descriptor.identity.name
    );
    let parameters: Vec<&ConstructorParameter> = descriptor.all_parameters().collect();
    let Some((last, leading)) = parameters.split_last() else {
        out.line(&format!("{head})"));
        return;
    };
    out.line(&head);
    out.indent();
    for parameter in leading {
        out.line(&format!("{},", parameter_text(parameter)));
    }
    out.line(&format!("{})", parameter_text(last)));
    out.outdent();
}

fn parameter_text(parameter: &ConstructorParameter) -> String {
    let mut text = String::new();
    for attribute in &parameter.attributes {
        text.push('[');
        text.push_str(attribute);
        text.push_str("] ");
    }
    text.push_str(&parameter.ty.display);
    text.push(' ');
    text.push_str(&verbatim(&parameter.name));
    text
}

#[cfg(test)]
mod tests {
    #![allow(
        unfulfilled_lint_expectations,
        reason = "clippy::expect_used is denied globally; tests may not hit those branches"
    )]
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface unexpected synthesis failures"
    )]
    use super::*;
    use crate::descriptor::{NameOrigin, TypeIdentity};
    use crate::model::{Accessibility, TypeDescriptor, TypeRef};
    use rstest::{fixture, rstest};

    fn parameter(name: &str, ty: TypeRef, null_check: bool) -> ConstructorParameter {
        ConstructorParameter {
            name: name.to_owned(),
            ty,
            null_check,
            target: name.to_owned(),
            attributes: Vec::new(),
            origin: NameOrigin::Derived,
        }
    }

    #[fixture]
    fn descriptor() -> ConstructorDescriptor {
        ConstructorDescriptor {
            identity: TypeIdentity::from(&TypeDescriptor::new("Sample")),
            accessibility: Accessibility::Public,
            parameters: Vec::new(),
            base_parameters: Vec::new(),
            documentation: None,
        }
    }

    fn options() -> RenderOptions {
        RenderOptions {
            nullable_directive: false,
            ..RenderOptions::default()
        }
    }

    const BANNER: &str = "/// <auto-generated>\n/// This code was generated by the QuickConstructor source generator.\n/// </auto-generated>\n\n";

    #[rstest]
    fn empty_constructor_has_empty_body(descriptor: ConstructorDescriptor) {
        let expected = format!(
            "{BANNER}partial class Sample\n{{\n    public Sample()\n    {{\n    }}\n}}\n"
        );
        assert_eq!(render(&descriptor, &options()), expected);
    }

    #[rstest]
    fn guards_precede_assignments(mut descriptor: ConstructorDescriptor) {
        descriptor.parameters = vec![
            parameter("name", TypeRef::reference("string"), true),
            parameter("count", TypeRef::value("int"), false),
            parameter("label", TypeRef::reference("string"), true),
        ];
        let text = render(&descriptor, &options());
        let body = text.split_once("{\n        if").map(|(_, rest)| rest).expect("guards rendered");
        let expected = concat!(
            " (@name == null)\n",
            "            throw new global::System.ArgumentNullException(nameof(@name));\n",
            "\n",
            "        if (@label == null)\n",
            "            throw new global::System.ArgumentNullException(nameof(@label));\n",
            "\n",
            "        this.@name = @name;\n",
            "        this.@count = @count;\n",
            "        this.@label = @label;\n",
            "    }\n",
            "}\n",
        );
        assert_eq!(body, expected);
    }

    #[rstest]
    fn base_parameters_come_first_and_are_forwarded(mut descriptor: ConstructorDescriptor) {
        descriptor.base_parameters = vec![
            parameter("x", TypeRef::value("int"), false),
            parameter("y", TypeRef::value("int"), false),
        ];
        descriptor.parameters = vec![parameter("z", TypeRef::value("int"), false)];
        let text = render(&descriptor, &options());
        assert!(text.contains(concat!(
            "    public Sample(\n",
            "        int @x,\n",
            "        int @y,\n",
            "        int @z)\n",
            "        : base(@x, @y)\n",
            "    {\n",
            "        this.@z = @z;\n",
            "    }\n",
        )));
        assert!(!text.contains("this.@x"));
    }

    #[rstest]
    fn inherited_parameters_are_forwarded_without_guards(mut descriptor: ConstructorDescriptor) {
        descriptor.base_parameters = vec![parameter("x", TypeRef::reference("string"), true)];
        descriptor.parameters = vec![parameter("y", TypeRef::reference("string"), true)];
        let text = render(&descriptor, &options());
        assert!(text.contains("        : base(@x)\n"));
        assert!(text.contains("        if (@y == null)\n"));
        assert!(!text.contains("if (@x == null)"));
        assert!(!text.contains("nameof(@x)"));
    }

    #[rstest]
    fn documentation_references_generic_type(mut descriptor: ConstructorDescriptor) {
        descriptor.identity.type_parameters = vec!["T".to_owned()];
        descriptor.documentation = Some("Creates a {0}.\nSecond <line>.".to_owned());
        let text = render(&descriptor, &options());
        assert!(text.contains(concat!(
            "    /// <summary>\n",
            "    /// Creates a <see cref=\"Sample{T}\" />.\n",
            "    /// Second &lt;line&gt;.\n",
            "    /// </summary>\n",
            "    public Sample()\n",
        )));
        assert!(text.contains("partial class Sample<T>\n"));
    }

    #[rstest]
    fn attributes_precede_parameter_type(mut descriptor: ConstructorDescriptor) {
        let mut attributed = parameter("name", TypeRef::reference("string"), false);
        attributed.attributes = vec!["NotNull".to_owned(), "MaxLength(4)".to_owned()];
        descriptor.parameters = vec![attributed];
        let text = render(&descriptor, &options());
        assert!(text.contains("        [NotNull] [MaxLength(4)] string @name)\n"));
    }

    #[rstest]
    #[case(LineEnding::Lf, 4, "\n    public Sample()\n")]
    #[case(LineEnding::Crlf, 2, "\r\n  public Sample()\r\n")]
    fn honours_layout_options(
        descriptor: ConstructorDescriptor,
        #[case] line_ending: LineEnding,
        #[case] indent_width: usize,
        #[case] fragment: &str,
    ) {
        let layout = RenderOptions {
            line_ending,
            indent_width,
            ..RenderOptions::default()
        };
        let text = render(&descriptor, &layout);
        assert!(text.contains(fragment));
        assert!(text.contains("#nullable enable"));
    }

    #[rstest]
    fn rendering_is_idempotent(mut descriptor: ConstructorDescriptor) {
        descriptor.parameters = vec![parameter("name", TypeRef::reference("string"), true)];
        descriptor.documentation = Some(crate::model::DEFAULT_DOCUMENTATION.to_owned());
        let first = render(&descriptor, &RenderOptions::default());
        assert_eq!(render(&descriptor, &RenderOptions::default()), first);
        assert_eq!(normalize(&first, LineEnding::Lf), first);
    }
}
