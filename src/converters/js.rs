//! Escaping for values spliced into generated JavaScript

/// Escape text for use inside a JavaScript template literal.
///
/// `${` is escaped so sample values can never open an interpolation.
pub fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Render text as a single-quoted JavaScript string literal
pub fn single_quoted(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("'{}'", escaped)
}
