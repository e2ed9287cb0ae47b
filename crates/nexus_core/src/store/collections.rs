//! Keyed collections with last-write-wins semantics.
//!
//! # Invariants
//! - `TopicBook` holds at most one topic per subject; replacing keeps the
//!   original position.
//! - `FeedbackBook` holds at most one record per `(student_id, subject)`; a
//!   resubmission moves the record to the end.

use crate::model::classroom::{ClassroomTopic, StudentFeedback};
use std::collections::{BTreeMap, HashMap};

/// Outcome of a topic upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicUpsert {
    Replaced(ClassroomTopic),
    Appended,
}

/// Topics in dispatch order, indexed by subject.
#[derive(Debug, Clone, Default)]
pub struct TopicBook {
    topics: Vec<ClassroomTopic>,
    by_subject: HashMap<String, usize>,
}

impl TopicBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, topic: ClassroomTopic) -> TopicUpsert {
        match self.by_subject.get(&topic.subject) {
            Some(&index) => {
                let previous = std::mem::replace(&mut self.topics[index], topic);
                TopicUpsert::Replaced(previous)
            }
            None => {
                self.by_subject
                    .insert(topic.subject.clone(), self.topics.len());
                self.topics.push(topic);
                TopicUpsert::Appended
            }
        }
    }

    pub fn get(&self, subject: &str) -> Option<&ClassroomTopic> {
        self.by_subject
            .get(subject)
            .and_then(|&index| self.topics.get(index))
    }

    pub fn as_slice(&self) -> &[ClassroomTopic] {
        &self.topics
    }
}

type FeedbackKey = (String, String);

/// Feedback records in submission order, indexed by `(student_id, subject)`.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBook {
    ordered: BTreeMap<u64, StudentFeedback>,
    by_key: HashMap<FeedbackKey, u64>,
    next_seq: u64,
}

impl FeedbackBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `feedback`, returning the record it replaced.
    pub fn submit(&mut self, feedback: StudentFeedback) -> Option<StudentFeedback> {
        let key = (feedback.student_id.clone(), feedback.subject.clone());
        let seq = self.next_seq;
        self.next_seq += 1;

        let previous = self
            .by_key
            .insert(key, seq)
            .and_then(|old_seq| self.ordered.remove(&old_seq));
        self.ordered.insert(seq, feedback);
        previous
    }

    pub fn get(&self, student_id: &str, subject: &str) -> Option<&StudentFeedback> {
        self.by_key
            .get(&(student_id.to_string(), subject.to_string()))
            .and_then(|seq| self.ordered.get(seq))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentFeedback> {
        self.ordered.values()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
