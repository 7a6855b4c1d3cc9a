use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// How many conversations the recent list keeps before evicting.
pub const RECENT_CONVERSATIONS_CAPACITY: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u64,
    pub category: Option<String>,
    pub question: String,
    pub summary: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Liked,
    Disliked,
    Helpful,
    NotHelpful,
    Clarify,
}

/// Bounded list of recent conversations, newest first. Overflow evicts
/// the oldest entry.
#[derive(Debug)]
pub struct RecentConversations {
    entries: VecDeque<Conversation>,
    capacity: usize,
    next_id: u64,
}

impl RecentConversations {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_CONVERSATIONS_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn push(
        &mut self,
        category: Option<String>,
        question: impl Into<String>,
        summary: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push_front(Conversation {
            id,
            category,
            question: question.into(),
            summary: summary.into(),
            created_at: OffsetDateTime::now_utc(),
            feedback: None,
        });
        self.entries.truncate(self.capacity);

        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records feedback on a conversation. Returns false when the
    /// conversation has already been evicted or never existed.
    pub fn set_feedback(&mut self, id: u64, feedback: Feedback) -> bool {
        match self.entries.iter_mut().find(|c| c.id == id) {
            Some(conversation) => {
                conversation.feedback = Some(feedback);
                true
            }
            None => false,
        }
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        let mut stats = FeedbackStats::default();
        for conversation in &self.entries {
            match conversation.feedback {
                Some(Feedback::Liked) => stats.liked += 1,
                Some(Feedback::Disliked) => stats.disliked += 1,
                Some(Feedback::Helpful) => stats.helpful += 1,
                Some(Feedback::NotHelpful) => stats.not_helpful += 1,
                Some(Feedback::Clarify) => stats.clarify += 1,
                None => {}
            }
        }
        stats
    }
}

impl Default for RecentConversations {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub liked: usize,
    pub disliked: usize,
    pub helpful: usize,
    pub not_helpful: usize,
    pub clarify: usize,
}

impl FeedbackStats {
    pub fn total(&self) -> usize {
        self.liked + self.disliked + self.helpful + self.not_helpful + self.clarify
    }

    /// Percentage of positive feedback (liked + helpful), rounded.
    /// Zero when no feedback has been given.
    pub fn satisfaction_rate(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let positive = self.liked + self.helpful;
        ((positive as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixth_push_evicts_the_oldest() {
        let mut log = RecentConversations::new();
        for i in 1..=6 {
            log.push(None, format!("question {i}"), "answer");
        }

        assert_eq!(log.len(), 5);
        // Newest first, question 1 is gone.
        let questions: Vec<_> = log.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(
            questions,
            ["question 6", "question 5", "question 4", "question 3", "question 2"]
        );
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut log = RecentConversations::new();
        for i in 0..50 {
            log.push(Some("Payments".to_string()), format!("q{i}"), "a");
            assert!(log.len() <= RECENT_CONVERSATIONS_CAPACITY);
        }
    }

    #[test]
    fn ids_stay_unique_across_eviction() {
        let mut log = RecentConversations::with_capacity(2);
        let first = log.push(None, "a", "a");
        let second = log.push(None, "b", "b");
        let third = log.push(None, "c", "c");

        assert!(first < second && second < third);
        assert!(!log.set_feedback(first, Feedback::Liked), "evicted id");
        assert!(log.set_feedback(third, Feedback::Liked));
    }

    #[test]
    fn satisfaction_rate_counts_positive_feedback() {
        let mut log = RecentConversations::new();
        let a = log.push(None, "a", "a");
        let b = log.push(None, "b", "b");
        let c = log.push(None, "c", "c");
        log.set_feedback(a, Feedback::Liked);
        log.set_feedback(b, Feedback::Helpful);
        log.set_feedback(c, Feedback::Disliked);

        let stats = log.feedback_stats();
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.satisfaction_rate(), 67);
    }

    #[test]
    fn satisfaction_rate_is_zero_without_feedback() {
        let log = RecentConversations::new();
        assert_eq!(log.feedback_stats().satisfaction_rate(), 0);
    }
}
