//! LaTeX body-text escaping.

/// Escape the characters that carry meaning in LaTeX body text.
///
/// | Character | Output              |
/// |-----------|---------------------|
/// | `\`       | `\textbackslash{}`  |
/// | `#`       | `\#`                |
/// | `$`       | `\$`                |
/// | `%`       | `\%`                |
/// | `&`       | `\&`                |
/// | `_`       | `\_`                |
/// | `{`       | `\{`                |
/// | `}`       | `\}`                |
/// | `~`       | `\~{}`              |
/// | `^`       | `\^{}`              |
///
/// Every other character is copied unchanged. The input is scanned once, so
/// backslashes introduced by a substitution are never escaped again.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                result.push('\\');
                result.push(c);
            }
            '~' | '^' => {
                result.push('\\');
                result.push(c);
                result.push_str("{}");
            }
            _ => result.push(c),
        }
    }

    result
}
