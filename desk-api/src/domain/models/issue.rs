use serde::Serialize;

/// A normalized trackable unit of work from the issue-tracking source.
///
/// `key` is globally unique per source; `id` is source-internal.
/// Timestamps stay as the ISO-8601 strings the source sent, they are
/// displayed, never computed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub key: String,
    pub summary: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub assignee: Option<String>,
    pub reporter: String,
    pub created: String,
    pub updated: String,
    pub project: ProjectRef,
    pub issue_type: IssueTypeRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeRef {
    pub name: String,
    pub icon_url: String,
}
