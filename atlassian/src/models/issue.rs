use serde::{Deserialize, Serialize};

use super::RawProject;

/// An issue as the tracker returns it. Everything below the identity
/// fields is nested under `fields` and deeply optional; consumers must
/// apply their own fallbacks.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub fields: Option<RawIssueFields>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<RawNamed>,
    #[serde(default)]
    pub priority: Option<RawNamed>,
    #[serde(default)]
    pub assignee: Option<RawUser>,
    #[serde(default)]
    pub reporter: Option<RawUser>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub project: Option<RawProject>,
    #[serde(rename = "issuetype", default)]
    pub issue_type: Option<RawIssueType>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNamed {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUser {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssueType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_wire_payload() {
        let issue: RawIssue = serde_json::from_value(serde_json::json!({
            "id": "10001",
            "key": "GLOB-123",
            "fields": {
                "summary": "Checkout fails",
                "description": "Payment is declined at step 3.",
                "status": { "name": "In Progress" },
                "priority": { "name": "Medium" },
                "assignee": { "displayName": "john.doe@global-e.com" },
                "reporter": { "displayName": "jane.smith@global-e.com" },
                "created": "2024-01-15T10:00:00.000Z",
                "updated": "2024-01-20T14:30:00.000Z",
                "project": { "key": "GLOB", "name": "Global-e Platform" },
                "issuetype": { "name": "Bug", "iconUrl": "https://example.com/bug-icon.png" }
            }
        }))
        .unwrap();

        assert_eq!(issue.key.as_deref(), Some("GLOB-123"));
        let fields = issue.fields.unwrap();
        assert_eq!(fields.status.unwrap().name.as_deref(), Some("In Progress"));
        assert_eq!(fields.issue_type.unwrap().name.as_deref(), Some("Bug"));
    }

    #[test]
    fn tolerates_missing_substructures() {
        let issue: RawIssue =
            serde_json::from_value(serde_json::json!({ "id": "1", "key": "X-1" })).unwrap();
        assert!(issue.fields.is_none());

        let issue: RawIssue = serde_json::from_value(serde_json::json!({
            "id": "1",
            "key": "X-1",
            "fields": { "status": {} }
        }))
        .unwrap();
        assert!(issue.fields.unwrap().status.unwrap().name.is_none());
    }
}
