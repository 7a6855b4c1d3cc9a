use super::{escape_text, sanitize_key, QueryExpression};

/// A JQL expression that matches free text against the text, summary and
/// description fields, most recently updated first.
#[derive(Debug, Clone)]
pub struct JqlQuery {
    text: String,
    project: Option<String>,
}

impl JqlQuery {
    pub fn text_search(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            project: None,
        }
    }

    /// Scope the search to a single project key.
    pub fn in_project(mut self, key: impl AsRef<str>) -> Self {
        self.project = Some(sanitize_key(key.as_ref()));
        self
    }

    /// The raw free text this expression was built from.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl QueryExpression for JqlQuery {
    fn as_query_string(&self) -> String {
        let escaped = escape_text(&self.text);
        let clause = format!(
            r#"text ~ "{escaped}" OR summary ~ "{escaped}" OR description ~ "{escaped}""#
        );

        match &self.project {
            Some(key) => format!("project = {key} AND ({clause}) ORDER BY updated DESC"),
            None => format!("{clause} ORDER BY updated DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_text_search_expression() {
        let jql = JqlQuery::text_search("payment gateway");
        assert_eq!(
            jql.as_query_string(),
            r#"text ~ "payment gateway" OR summary ~ "payment gateway" OR description ~ "payment gateway" ORDER BY updated DESC"#
        );
    }

    #[test]
    fn scopes_to_project() {
        let jql = JqlQuery::text_search("checkout").in_project("GLOB");
        let expr = jql.as_query_string();
        assert!(expr.starts_with("project = GLOB AND ("));
        assert!(expr.ends_with(") ORDER BY updated DESC"));
    }

    #[test]
    fn escapes_embedded_quotes() {
        let jql = JqlQuery::text_search(r#"quoted "term""#);
        let expr = jql.as_query_string();
        assert!(expr.contains(r#"text ~ "quoted \"term\"""#));
    }

    #[test]
    fn hostile_project_key_is_sanitized() {
        let jql = JqlQuery::text_search("x").in_project("GLOB OR reporter = admin");
        assert!(jql
            .as_query_string()
            .starts_with("project = GLOBORreporteradmin AND"));
    }
}
