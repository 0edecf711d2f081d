#![allow(dead_code)]

//! Knowledge Base — the ordered set of predefined question/answer records plus
//! the distinguished fallback reply.
//!
//! Built once at startup and shared read-only by every request
//! (`Arc<KnowledgeBase>` inside the engine). Record order is significant:
//! exact matching and keyword scoring both break ties by position.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::content::{FALLBACK, RECORDS, SUGGESTED_TOPICS};

/// Id carried by the fallback record of the built-in knowledge base.
pub const FALLBACK_ID: &str = "default-contact";

/// A single predefined question with its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl QuestionAnswer {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }
}

/// Compile-time form of a record, used by the static content table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Seed {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

impl From<&Seed> for QuestionAnswer {
    fn from(seed: &Seed) -> Self {
        QuestionAnswer::new(seed.id, seed.question, seed.answer, seed.category)
    }
}

/// A clickable suggestion shown by the chat UI. `query` is always an exact
/// knowledge-base question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub text: &'static str,
    pub query: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("duplicate question '{0}'")]
    DuplicateQuestion(String),

    #[error("record '{0}' has an empty question")]
    EmptyQuestion(String),

    #[error("record '{0}' has an empty answer")]
    EmptyAnswer(String),

    #[error("fallback record '{0}' must have an empty question")]
    FallbackHasQuestion(String),
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<QuestionAnswer>,
    fallback: QuestionAnswer,
}

impl KnowledgeBase {
    /// Builds a validated knowledge base from answerable records and a fallback.
    ///
    /// Every record needs a non-empty question and answer; ids and
    /// (case-insensitive) questions must be unique across the whole set,
    /// fallback included.
    pub fn new(
        records: Vec<QuestionAnswer>,
        fallback: QuestionAnswer,
    ) -> Result<Self, KnowledgeBaseError> {
        if !fallback.question.trim().is_empty() {
            return Err(KnowledgeBaseError::FallbackHasQuestion(fallback.id));
        }
        if fallback.answer.trim().is_empty() {
            return Err(KnowledgeBaseError::EmptyAnswer(fallback.id));
        }

        let mut ids: HashSet<&str> = HashSet::from([fallback.id.as_str()]);
        let mut questions: HashSet<String> = HashSet::new();

        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(KnowledgeBaseError::DuplicateId(record.id.clone()));
            }
            if record.question.trim().is_empty() {
                return Err(KnowledgeBaseError::EmptyQuestion(record.id.clone()));
            }
            if record.answer.trim().is_empty() {
                return Err(KnowledgeBaseError::EmptyAnswer(record.id.clone()));
            }
            if !questions.insert(record.question.to_lowercase()) {
                return Err(KnowledgeBaseError::DuplicateQuestion(
                    record.question.clone(),
                ));
            }
        }

        Ok(Self { records, fallback })
    }

    /// The coach's built-in knowledge base. The static table is covered by
    /// `test_builtin_content_passes_validation`.
    pub fn builtin() -> Self {
        Self {
            records: RECORDS.iter().map(QuestionAnswer::from).collect(),
            fallback: QuestionAnswer::from(&FALLBACK),
        }
    }

    /// Answerable records, in knowledge-base order. The fallback is not included.
    pub fn records(&self) -> &[QuestionAnswer] {
        &self.records
    }

    pub fn fallback(&self) -> &QuestionAnswer {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.records.len() + 1
    }

    pub fn suggested_topics(&self) -> &'static [Topic] {
        SUGGESTED_TOPICS
    }
}
