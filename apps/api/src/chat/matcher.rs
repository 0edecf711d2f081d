//! Matcher — resolves sanitized chat input against the knowledge base.
//!
//! Two strategies:
//! 1. Exact match: case-insensitive whole-string equality with a record's question.
//! 2. Keyword scoring (offline best-effort): for every candidate except the
//!    fallback, split the lowercased question on spaces and the category on
//!    commas; each token longer than 3 chars found inside the input scores
//!    1.0, plus 0.5 if the token also appears in the category. The best
//!    candidate wins only with a score strictly above [`MIN_MATCH_SCORE`].

use super::knowledge_base::{KnowledgeBase, QuestionAnswer};

/// Minimum keyword score (exclusive) a candidate needs to be returned.
pub const MIN_MATCH_SCORE: f32 = 1.0;

/// Tokens this short or shorter never score.
const MIN_KEYWORD_CHARS: usize = 3;

const CATEGORY_BONUS: f32 = 0.5;

/// Returned by [`best_match`] for blank input.
pub const DIDNT_UNDERSTAND: &str = "I'm not sure I understand your question. Could you please rephrase it or select one of the suggested topics?";

/// Returned by [`exact_answer`] when nothing matches.
pub const NO_PREDEFINED_ANSWER: &str = "I don't have a predefined answer for that specific question. Let me provide a general response.";

/// First record whose question equals `input`, ignoring case.
pub fn find_exact<'kb>(kb: &'kb KnowledgeBase, input: &str) -> Option<&'kb QuestionAnswer> {
    let normalized = input.to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    kb.records()
        .iter()
        .find(|qa| qa.question.to_lowercase() == normalized)
}

pub fn is_exact_match(kb: &KnowledgeBase, sanitized: &str) -> bool {
    find_exact(kb, sanitized).is_some()
}

/// The exact-match answer, or [`NO_PREDEFINED_ANSWER`].
pub fn exact_answer<'kb>(kb: &'kb KnowledgeBase, sanitized: &str) -> &'kb str {
    find_exact(kb, sanitized)
        .map(|qa| qa.answer.as_str())
        .unwrap_or(NO_PREDEFINED_ANSWER)
}

/// Keyword score of `candidate` against already-lowercased `input`.
pub fn keyword_score(candidate: &QuestionAnswer, input: &str) -> f32 {
    let question = candidate.question.to_lowercase();
    let category = candidate.category.to_lowercase();

    question
        .split(' ')
        .chain(candidate.category.split(','))
        .filter(|kw| kw.chars().count() > MIN_KEYWORD_CHARS && input.contains(kw))
        .map(|kw| {
            if category.contains(kw) {
                1.0 + CATEGORY_BONUS
            } else {
                1.0
            }
        })
        .sum()
}

/// Best-effort answer for free text without calling the generator.
///
/// Blank input gets [`DIDNT_UNDERSTAND`]; an exact question gets its answer;
/// otherwise the highest keyword score wins (earlier records win ties) if it
/// clears the threshold, else the fallback answer.
pub fn best_match<'kb>(kb: &'kb KnowledgeBase, raw: &str) -> &'kb str {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return DIDNT_UNDERSTAND;
    }

    if let Some(qa) = find_exact(kb, &input) {
        return &qa.answer;
    }

    let mut best: Option<&QuestionAnswer> = None;
    let mut highest = 0.0_f32;

    for qa in kb.records() {
        let score = keyword_score(qa, &input);
        if score > highest {
            highest = score;
            best = Some(qa);
        }
    }

    match best {
        Some(qa) if highest > MIN_MATCH_SCORE => &qa.answer,
        _ => &kb.fallback().answer,
    }
}
