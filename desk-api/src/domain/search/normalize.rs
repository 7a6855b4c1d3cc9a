//! Maps raw wire records onto the flat shapes the interface consumes.
//!
//! Every optional nested accessor has an explicit fallback. A record
//! missing its identity fields is dropped rather than emitted
//! half-populated; callers count and log the drops.

use atlassian::models::{RawIssue, RawPage};

use crate::domain::models::{Document, Issue, IssueTypeRef, ProjectRef, SpaceRef};

/// Fallback status label for issues whose status is absent.
const UNKNOWN_STATUS: &str = "Unknown";
/// Fallback priority label for issues whose priority is absent.
const DEFAULT_PRIORITY: &str = "Medium";
/// Fallback status for pages whose status is absent.
const DEFAULT_PAGE_STATUS: &str = "current";

/// Normalizes a raw issue. Returns `None` when `id` or `key` is missing.
pub fn issue(raw: RawIssue) -> Option<Issue> {
    let id = raw.id.filter(|v| !v.is_empty())?;
    let key = raw.key.filter(|v| !v.is_empty())?;
    let fields = raw.fields.unwrap_or_default();

    Some(Issue {
        id,
        key,
        summary: fields.summary.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        status: fields
            .status
            .and_then(|s| s.name)
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        priority: fields
            .priority
            .and_then(|p| p.name)
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
        assignee: fields.assignee.and_then(|a| a.display_name),
        reporter: fields
            .reporter
            .and_then(|r| r.display_name)
            .unwrap_or_default(),
        created: fields.created.unwrap_or_default(),
        updated: fields.updated.unwrap_or_default(),
        project: fields
            .project
            .map(|p| ProjectRef {
                key: p.key.unwrap_or_default(),
                name: p.name.unwrap_or_default(),
            })
            .unwrap_or_default(),
        issue_type: fields
            .issue_type
            .map(|t| IssueTypeRef {
                name: t.name.unwrap_or_default(),
                icon_url: t.icon_url.unwrap_or_default(),
            })
            .unwrap_or_default(),
    })
}

/// Normalizes a raw page. Returns `None` when `id` or `title` is missing.
pub fn document(raw: RawPage) -> Option<Document> {
    let id = raw.id.filter(|v| !v.is_empty())?;
    let title = raw.title.filter(|v| !v.is_empty())?;

    Some(Document {
        id,
        title,
        space: raw
            .space
            .map(|s| SpaceRef {
                key: s.key.unwrap_or_default(),
                name: s.name.unwrap_or_default(),
            })
            .unwrap_or_default(),
        status: raw
            .status
            .unwrap_or_else(|| DEFAULT_PAGE_STATUS.to_string()),
        version: raw.version.and_then(|v| v.number).unwrap_or(1),
        body: raw
            .body
            .and_then(|b| b.storage)
            .and_then(|s| s.value)
            .unwrap_or_default(),
        url: raw.links.and_then(|l| l.webui).unwrap_or_default(),
    })
}
