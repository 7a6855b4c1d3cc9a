use super::{escape_text, sanitize_key, QueryExpression};

/// A CQL expression that matches free text against page text and titles,
/// most recently modified first.
#[derive(Debug, Clone)]
pub struct CqlQuery {
    text: String,
    space: Option<String>,
}

impl CqlQuery {
    pub fn text_search(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            space: None,
        }
    }

    /// Scope the search to a single space key.
    pub fn in_space(mut self, key: impl AsRef<str>) -> Self {
        self.space = Some(sanitize_key(key.as_ref()));
        self
    }

    /// The raw free text this expression was built from.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl QueryExpression for CqlQuery {
    fn as_query_string(&self) -> String {
        let escaped = escape_text(&self.text);
        let clause = format!(r#"text ~ "{escaped}" OR title ~ "{escaped}""#);

        match &self.space {
            Some(key) => format!(r#"({clause}) AND space = "{key}" ORDER BY lastmodified DESC"#),
            None => format!("{clause} ORDER BY lastmodified DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_text_search_expression() {
        let cql = CqlQuery::text_search("payment gateway");
        assert_eq!(
            cql.as_query_string(),
            r#"text ~ "payment gateway" OR title ~ "payment gateway" ORDER BY lastmodified DESC"#
        );
    }

    #[test]
    fn scopes_to_space() {
        let cql = CqlQuery::text_search("refunds").in_space("KB");
        assert_eq!(
            cql.as_query_string(),
            r#"(text ~ "refunds" OR title ~ "refunds") AND space = "KB" ORDER BY lastmodified DESC"#
        );
    }

    #[test]
    fn escapes_backslashes() {
        let cql = CqlQuery::text_search(r"path\to\thing");
        assert!(cql.as_query_string().contains(r#"text ~ "path\\to\\thing""#));
    }
}
