//! Canned wire payloads used when no live connection is available.
//!
//! The payloads carry the same nesting as the live wire format so that
//! consumers normalize them through the exact same path as live data.

use crate::models::{
    RawBody, RawIssue, RawIssueFields, RawIssueType, RawLinks, RawNamed, RawPage, RawProject,
    RawSpace, RawStorage, RawUser, RawVersion,
};

fn named(name: &str) -> Option<RawNamed> {
    Some(RawNamed {
        name: Some(name.to_string()),
    })
}

fn user(display_name: &str) -> Option<RawUser> {
    Some(RawUser {
        display_name: Some(display_name.to_string()),
    })
}

fn project(key: &str, name: &str) -> Option<RawProject> {
    Some(RawProject {
        key: Some(key.to_string()),
        name: Some(name.to_string()),
    })
}

fn space(key: &str, name: &str) -> Option<RawSpace> {
    Some(RawSpace {
        key: Some(key.to_string()),
        name: Some(name.to_string()),
    })
}

fn body(value: String) -> Option<RawBody> {
    Some(RawBody {
        storage: Some(RawStorage { value: Some(value) }),
    })
}

/// Issue search results for the given free-text query. The second issue
/// deliberately has no assignee.
pub fn issue_results(query: &str) -> Vec<RawIssue> {
    vec![
        RawIssue {
            id: Some("10001".to_string()),
            key: Some("GLOB-123".to_string()),
            fields: Some(RawIssueFields {
                summary: Some(format!("Issue related to {query}")),
                description: Some(
                    "Investigation notes and reproduction steps for the reported problem."
                        .to_string(),
                ),
                status: named("In Progress"),
                priority: named("Medium"),
                assignee: user("john.doe@global-e.com"),
                reporter: user("jane.smith@global-e.com"),
                created: Some("2024-01-15T10:00:00.000Z".to_string()),
                updated: Some("2024-01-20T14:30:00.000Z".to_string()),
                project: project("GLOB", "Global-e Platform"),
                issue_type: Some(RawIssueType {
                    name: Some("Bug".to_string()),
                    icon_url: Some("https://example.com/bug-icon.png".to_string()),
                }),
            }),
        },
        RawIssue {
            id: Some("10002".to_string()),
            key: Some("GLOB-124".to_string()),
            fields: Some(RawIssueFields {
                summary: Some(format!("Feature request for {query}")),
                description: Some("Requested by the merchant success team.".to_string()),
                status: named("To Do"),
                priority: named("High"),
                assignee: None,
                reporter: user("admin@global-e.com"),
                created: Some("2024-01-16T09:00:00.000Z".to_string()),
                updated: Some("2024-01-16T09:00:00.000Z".to_string()),
                project: project("GLOB", "Global-e Platform"),
                issue_type: Some(RawIssueType {
                    name: Some("Story".to_string()),
                    icon_url: Some("https://example.com/story-icon.png".to_string()),
                }),
            }),
        },
    ]
}

/// Page search results for the given free-text query.
pub fn page_results(query: &str) -> Vec<RawPage> {
    vec![
        RawPage {
            id: Some("123456".to_string()),
            title: Some(format!("Documentation for {query}")),
            space: space("TECH", "Technical Documentation"),
            status: Some("current".to_string()),
            version: Some(RawVersion { number: Some(1) }),
            body: body(format!(
                "<p>Reference content about {query}.</p><p>Covers troubleshooting and implementation.</p>"
            )),
            links: Some(RawLinks {
                webui: Some(
                    "https://example.atlassian.net/wiki/spaces/TECH/pages/123456".to_string(),
                ),
            }),
        },
        RawPage {
            id: Some("123457".to_string()),
            title: Some(format!("Best Practices: {query}")),
            space: space("KB", "Knowledge Base"),
            status: Some("current".to_string()),
            version: Some(RawVersion { number: Some(2) }),
            body: body(format!(
                "<p>Best practices guide for {query}.</p><ul><li>Configuration</li><li>Testing</li><li>Deployment</li></ul>"
            )),
            links: Some(RawLinks {
                webui: Some(
                    "https://example.atlassian.net/wiki/spaces/KB/pages/123457".to_string(),
                ),
            }),
        },
    ]
}

/// A single detailed issue for the given key.
pub fn issue(key: &str) -> RawIssue {
    RawIssue {
        id: Some("10001".to_string()),
        key: Some(key.to_string()),
        fields: Some(RawIssueFields {
            summary: Some(format!("Detailed issue: {key}")),
            description: Some(
                "Full write-up of the problem, the root cause and the applied fix.".to_string(),
            ),
            status: named("In Progress"),
            priority: named("Medium"),
            assignee: user("john.doe@global-e.com"),
            reporter: user("jane.smith@global-e.com"),
            created: Some("2024-01-15T10:00:00.000Z".to_string()),
            updated: Some("2024-01-20T14:30:00.000Z".to_string()),
            project: project("GLOB", "Global-e Platform"),
            issue_type: Some(RawIssueType {
                name: Some("Bug".to_string()),
                icon_url: Some("https://example.com/bug-icon.png".to_string()),
            }),
        }),
    }
}

/// A single detailed page for the given id.
pub fn page(id: &str) -> RawPage {
    RawPage {
        id: Some(id.to_string()),
        title: Some("Detailed Documentation Page".to_string()),
        space: space("TECH", "Technical Documentation"),
        status: Some("current".to_string()),
        version: Some(RawVersion { number: Some(1) }),
        body: body(
            "<h1>Detailed Documentation</h1><h2>Overview</h2><p>Topic overview.</p>\
             <h2>Implementation</h2><p>Implementation details.</p>\
             <h2>Troubleshooting</h2><p>Common issues and their solutions.</p>"
                .to_string(),
        ),
        links: Some(RawLinks {
            webui: Some(format!(
                "https://example.atlassian.net/wiki/spaces/TECH/pages/{id}"
            )),
        }),
    }
}

pub fn projects() -> Vec<RawProject> {
    vec![
        RawProject {
            key: Some("GLOB".to_string()),
            name: Some("Global-e Platform".to_string()),
        },
        RawProject {
            key: Some("CORE".to_string()),
            name: Some("Core Development".to_string()),
        },
        RawProject {
            key: Some("QA".to_string()),
            name: Some("Quality Assurance".to_string()),
        },
    ]
}

pub fn spaces() -> Vec<RawSpace> {
    vec![
        RawSpace {
            key: Some("TECH".to_string()),
            name: Some("Technical Documentation".to_string()),
        },
        RawSpace {
            key: Some("KB".to_string()),
            name: Some("Knowledge Base".to_string()),
        },
        RawSpace {
            key: Some("PROD".to_string()),
            name: Some("Production".to_string()),
        },
    ]
}
