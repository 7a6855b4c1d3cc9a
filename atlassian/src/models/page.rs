use serde::{Deserialize, Serialize};

use super::RawSpace;

/// A wiki page as the documentation source returns it. Body content is
/// nested under `body.storage.value`; every level is optional.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub space: Option<RawSpace>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<RawVersion>,
    #[serde(default)]
    pub body: Option<RawBody>,
    #[serde(rename = "_links", default)]
    pub links: Option<RawLinks>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVersion {
    #[serde(default)]
    pub number: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBody {
    #[serde(default)]
    pub storage: Option<RawStorage>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStorage {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLinks {
    #[serde(default)]
    pub webui: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_wire_payload() {
        let page: RawPage = serde_json::from_value(serde_json::json!({
            "id": "123456",
            "title": "Payment Gateway Setup",
            "space": { "key": "TECH", "name": "Technical Documentation" },
            "status": "current",
            "version": { "number": 3 },
            "body": { "storage": { "value": "<p>Setup guide.</p>" } },
            "_links": { "webui": "https://example.atlassian.net/wiki/spaces/TECH/pages/123456" }
        }))
        .unwrap();

        assert_eq!(page.title.as_deref(), Some("Payment Gateway Setup"));
        assert_eq!(page.version.unwrap().number, Some(3));
        assert_eq!(
            page.body.unwrap().storage.unwrap().value.as_deref(),
            Some("<p>Setup guide.</p>")
        );
    }

    #[test]
    fn tolerates_missing_substructures() {
        let page: RawPage = serde_json::from_value(serde_json::json!({
            "id": "1",
            "title": "Bare page",
            "body": {}
        }))
        .unwrap();
        assert!(page.body.unwrap().storage.is_none());
        assert!(page.version.is_none());
        assert!(page.links.is_none());
    }
}
