//! Fixture knowledge source serving canned payloads.
//!
//! Used when no live connection is configured, and by tests, which can
//! also inject failures per operation group.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use atlassian::{
    fixtures,
    models::{RawIssue, RawPage, RawProject, RawSpace},
    query::{CqlQuery, JqlQuery},
};

use super::super::traits::{KnowledgeSource, Result, SearchError};

#[derive(Clone, Default)]
pub struct FixtureSource {
    fail_searches: Arc<AtomicBool>,
    fail_probes: Arc<AtomicBool>,
    search_calls: Arc<AtomicUsize>,
    probe_calls: Arc<AtomicUsize>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every search operation returns an injected error.
    pub fn with_failing_searches(self) -> Self {
        self.set_fail_searches(true);
        self
    }

    /// Every probe operation returns an injected error.
    pub fn with_failing_probes(self) -> Self {
        self.set_fail_probes(true);
        self
    }

    /// Flips search failure injection on a source already handed out,
    /// clones included.
    pub fn set_fail_searches(&self, fail: bool) {
        self.fail_searches.store(fail, Ordering::SeqCst);
    }

    /// Flips probe failure injection on a source already handed out,
    /// clones included.
    pub fn set_fail_probes(&self, fail: bool) {
        self.fail_probes.store(fail, Ordering::SeqCst);
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn probe_call_count(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    fn search_gate(&self) -> Result<()> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(SearchError::SourceError("injected search failure".into()));
        }
        Ok(())
    }

    fn probe_gate(&self) -> Result<()> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_probes.load(Ordering::SeqCst) {
            return Err(SearchError::SourceError("injected probe failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl KnowledgeSource for FixtureSource {
    async fn search_issues(&self, jql: &JqlQuery) -> Result<Vec<RawIssue>> {
        self.search_gate()?;
        Ok(fixtures::issue_results(jql.text()))
    }

    async fn search_documents(&self, cql: &CqlQuery) -> Result<Vec<RawPage>> {
        self.search_gate()?;
        Ok(fixtures::page_results(cql.text()))
    }

    async fn get_issue(&self, key: &str) -> Result<RawIssue> {
        self.search_gate()?;
        Ok(fixtures::issue(key))
    }

    async fn get_document(&self, id: &str) -> Result<RawPage> {
        self.search_gate()?;
        Ok(fixtures::page(id))
    }

    async fn list_projects(&self) -> Result<Vec<RawProject>> {
        self.probe_gate()?;
        Ok(fixtures::projects())
    }

    async fn list_spaces(&self) -> Result<Vec<RawSpace>> {
        self.probe_gate()?;
        Ok(fixtures::spaces())
    }
}
