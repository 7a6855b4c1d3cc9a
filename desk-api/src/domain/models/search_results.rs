use serde::Serialize;

use super::{Document, Issue};

/// The merged output of one aggregate search. `total_count` is derived
/// from the two lists at construction and cannot be mutated separately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    issues: Vec<Issue>,
    documents: Vec<Document>,
    total_count: usize,
}

impl SearchResults {
    pub fn new(issues: Vec<Issue>, documents: Vec<Document>) -> Self {
        let total_count = issues.len() + documents.len();
        Self {
            issues,
            documents,
            total_count,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }
}
