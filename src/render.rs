//! Interface Renderer - assembles member lines into the interface text

/// Render an interface declaration
///
/// Layout: header, indented property lines, one blank separator line, indented
/// method lines, closing brace. Lines are joined with `\n` and the result has
/// no trailing newline. The separator is emitted even when both sections are
/// empty, so an empty class renders `interface Empty {\n\n}`.
pub fn render_interface(
    name: &str,
    generics: &[String],
    property_lines: &[String],
    method_lines: &[String],
    indent: &str,
) -> String {
    let mut lines = Vec::with_capacity(property_lines.len() + method_lines.len() + 3);

    if generics.is_empty() {
        lines.push(format!("interface {} {{", name));
    } else {
        lines.push(format!("interface {}<{}> {{", name, generics.join(", ")));
    }
    lines.extend(property_lines.iter().map(|line| format!("{}{}", indent, line)));
    lines.push(String::new());
    lines.extend(method_lines.iter().map(|line| format!("{}{}", indent, line)));
    lines.push("}".to_string());

    lines.join("\n")
}
