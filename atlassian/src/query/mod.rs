mod cql;
mod jql;

pub use cql::CqlQuery;
pub use jql::JqlQuery;

/// A source-specific textual filter expression built from free text.
pub trait QueryExpression {
    fn as_query_string(&self) -> String;
}

/// Escapes free text for embedding inside a quoted term of a query
/// expression. Backslashes and double quotes are escaped, ASCII control
/// characters are stripped. Raw interpolation of user input into JQL/CQL
/// can corrupt or redirect the generated query.
pub(crate) fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c if c.is_control() => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Keys (project/space) are not quoted in the generated expression, so
/// they are reduced to the character set Atlassian keys actually use.
pub(crate) fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_text(r#"a "b" c"#), r#"a \"b\" c"#);
        assert_eq!(escape_text(r"back\slash"), r"back\\slash");
        assert_eq!(escape_text(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(escape_text("a\u{0}b\nc\td"), "abcd");
    }

    #[test]
    fn passes_through_unicode() {
        assert_eq!(escape_text("xyz✓unicode"), "xyz✓unicode");
    }

    #[test]
    fn sanitize_key_drops_punctuation() {
        assert_eq!(sanitize_key("GLOB"), "GLOB");
        assert_eq!(sanitize_key("GLOB\" OR 1=1"), "GLOBOR11");
    }

    /// Scans a generated expression and verifies every quoted term is
    /// properly delimited: inside a term, a `"` must be preceded by an
    /// odd run of backslashes.
    fn assert_quotes_balanced(expr: &str) {
        let mut in_term = false;
        let mut backslashes = 0usize;
        for c in expr.chars() {
            match c {
                '\\' if in_term => backslashes += 1,
                '"' => {
                    if in_term && backslashes % 2 == 0 {
                        in_term = false;
                    } else if !in_term {
                        in_term = true;
                    }
                    backslashes = 0;
                }
                _ => backslashes = 0,
            }
        }
        assert!(!in_term, "unterminated quoted term in: {expr}");
    }

    #[test]
    fn hostile_inputs_cannot_break_out() {
        let hostile = [
            r#"" OR project = SECRET OR text ~ ""#,
            r#"\" OR 1=1"#,
            r"trailing\",
            "\"\"\"",
            "\\\\\"",
            "newline\ninjection\r\n",
            "null\u{0}byte",
            "✓ mixed \"unicode\" and \\ specials",
        ];
        for input in hostile {
            let escaped = escape_text(input);
            assert_quotes_balanced(&format!("text ~ \"{escaped}\""));
        }
    }
}
