//! Chat Engine — resolves one visitor question into one reply string.
//!
//! Flow: rate check → sanitize → exact knowledge-base lookup →
//!       primary generator (role-primed) → fallback generator (raw prompt).
//!
//! `respond` never fails. Every failure path maps to one of the fixed
//! user-facing strings below; details go to the log only.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::chat::knowledge_base::KnowledgeBase;
use crate::chat::matcher::{best_match, exact_answer, is_exact_match};
use crate::chat::prompts::{build_primed_prompt, with_cta};
use crate::chat::rate_limiter::RateLimiter;
use crate::chat::sanitizer::sanitize;
use crate::llm_client::{LlmError, ModelVariant, TextGenerator};

/// Rate-limit bucket used when the caller has no client id.
pub const DEFAULT_CLIENT_ID: &str = "default";

pub const RATE_LIMITED: &str =
    "You've sent too many messages in a short period. Please wait a moment before trying again.";
pub const INVALID_QUESTION: &str = "Please provide a valid question.";
pub const GENERATOR_EMPTY: &str = "I apologize, but I couldn't generate a response at this time. Would you like to ask something else or try rephrasing your question?";
pub const TECHNICAL_DIFFICULTIES: &str = "I'm experiencing technical difficulties at the moment. Please try again later or ask a different question.";

pub struct ChatEngine {
    knowledge_base: Arc<KnowledgeBase>,
    rate_limiter: Arc<RateLimiter>,
    generator: Arc<dyn TextGenerator>,
    generator_timeout: Duration,
}

impl ChatEngine {
    pub fn new(
        knowledge_base: Arc<KnowledgeBase>,
        rate_limiter: Arc<RateLimiter>,
        generator: Arc<dyn TextGenerator>,
        generator_timeout: Duration,
    ) -> Self {
        Self {
            knowledge_base,
            rate_limiter,
            generator,
            generator_timeout,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    #[cfg(test)]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Answers `question` for `client_id` (shared default bucket when `None` or empty).
    ///
    /// The rate-limit slot is consumed before sanitizing, so even rejected
    /// blank input counts against the client.
    pub async fn respond(&self, question: &str, client_id: Option<&str>) -> String {
        let client_id = client_id
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_CLIENT_ID);

        if !self.rate_limiter.allow(client_id) {
            return RATE_LIMITED.to_string();
        }

        let sanitized = sanitize(question);
        if sanitized.is_empty() {
            return INVALID_QUESTION.to_string();
        }

        if is_exact_match(&self.knowledge_base, &sanitized) {
            debug!("exact knowledge-base match");
            return exact_answer(&self.knowledge_base, &sanitized).to_string();
        }

        self.generate_answer(&sanitized).await
    }

    /// Offline keyword match; no rate limiting and no generator call.
    pub fn best_match(&self, raw: &str) -> &str {
        best_match(&self.knowledge_base, raw)
    }

    async fn generate_answer(&self, sanitized: &str) -> String {
        let primed = build_primed_prompt(sanitized);

        match self.call_generator(&primed, ModelVariant::Primary).await {
            Ok(text) => finish(text),
            Err(e) => {
                warn!("Primary generator failed, trying fallback: {e}");
                match self.call_generator(sanitized, ModelVariant::Fallback).await {
                    Ok(text) => finish(text),
                    Err(e) => {
                        error!("Fallback generator failed: {e}");
                        TECHNICAL_DIFFICULTIES.to_string()
                    }
                }
            }
        }
    }

    async fn call_generator(&self, prompt: &str, variant: ModelVariant) -> Result<String, LlmError> {
        tokio::time::timeout(self.generator_timeout, self.generator.generate(prompt, variant))
            .await
            .map_err(|_| LlmError::Timeout(self.generator_timeout))?
    }
}

fn finish(text: String) -> String {
    if text.trim().is_empty() {
        warn!("Generator returned empty content");
        return GENERATOR_EMPTY.to_string();
    }
    with_cta(&text)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::prompts::CONSULTATION_CTA;
    use crate::config::RateLimitConfig;

    /// Scripted generator outcome.
    #[derive(Debug, Clone)]
    pub(crate) enum Reply {
        Text(&'static str),
        Fail,
        Hang,
    }

    /// Test double that replays scripted replies and records every call.
    #[derive(Default)]
    pub(crate) struct MockGenerator {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<(String, ModelVariant)>>,
    }

    impl MockGenerator {
        pub(crate) fn scripted(replies: Vec<Reply>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> Vec<(String, ModelVariant)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str, variant: ModelVariant) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), variant));
            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Text(text)) => Ok(text.to_string()),
                Some(Reply::Hang) => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
                Some(Reply::Fail) | None => Err(LlmError::Api {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    pub(crate) fn engine_with(generator: Arc<MockGenerator>) -> ChatEngine {
        ChatEngine::new(
            Arc::new(KnowledgeBase::builtin()),
            Arc::new(RateLimiter::new(RateLimitConfig::default())),
            generator,
            Duration::from_secs(10),
        )
    }

    #[tokio::test]
    async fn test_exact_question_returns_answer_without_cta() {
        let generator = MockGenerator::scripted(vec![]);
        let engine = engine_with(generator.clone());
        let kb = KnowledgeBase::builtin();

        for (i, record) in kb.records().iter().enumerate() {
            let variants = [
                record.question.clone(),
                record.question.to_uppercase(),
                format!("   {}\n", record.question.to_lowercase()),
            ];
            for (j, q) in variants.iter().enumerate() {
                let client = format!("client-{i}-{j}");
                let reply = engine.respond(q, Some(&client)).await;
                assert_eq!(reply, record.answer);
                assert!(!reply.contains(CONSULTATION_CTA));
            }
        }
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_question_uses_primed_prompt_and_appends_cta() {
        let generator = MockGenerator::scripted(vec![Reply::Text("Delegate more.")]);
        let engine = engine_with(generator.clone());

        let reply = engine
            .respond("zzz_nonexistent_topic_zzz", Some("visitor"))
            .await;

        assert_eq!(reply, format!("Delegate more.\n\n{CONSULTATION_CTA}"));
        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, ModelVariant::Primary);
        assert!(calls[0].0.ends_with("User question: zzz_nonexistent_topic_zzz"));
    }

    #[tokio::test]
    async fn test_empty_generator_output_has_no_cta() {
        let generator = MockGenerator::scripted(vec![Reply::Text("  ")]);
        let engine = engine_with(generator.clone());

        let reply = engine.respond("What is stoicism?", None).await;
        assert_eq!(reply, GENERATOR_EMPTY);
        assert_eq!(generator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_primary_failure_retries_fallback_with_sanitized_prompt() {
        let generator =
            MockGenerator::scripted(vec![Reply::Fail, Reply::Text("Fallback answer.")]);
        let engine = engine_with(generator.clone());

        let reply = engine
            .respond("  <script>x</script>How to give feedback?  ", None)
            .await;

        assert_eq!(reply, format!("Fallback answer.\n\n{CONSULTATION_CTA}"));
        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            ("xHow to give feedback?".to_string(), ModelVariant::Fallback)
        );
    }

    #[tokio::test]
    async fn test_both_generators_failing_returns_technical_difficulties() {
        let generator = MockGenerator::scripted(vec![Reply::Fail, Reply::Fail]);
        let engine = engine_with(generator.clone());

        let reply = engine.respond("How to give feedback?", None).await;

        assert_eq!(reply, TECHNICAL_DIFFICULTIES);
        let calls = generator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls.iter().filter(|(_, v)| *v == ModelVariant::Fallback).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_fallback_empty_output_returns_generator_empty() {
        let generator = MockGenerator::scripted(vec![Reply::Fail, Reply::Text("")]);
        let engine = engine_with(generator);

        assert_eq!(engine.respond("Any tips?", None).await, GENERATOR_EMPTY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_primary_times_out_into_fallback() {
        let generator = MockGenerator::scripted(vec![Reply::Hang, Reply::Text("Late but fine.")]);
        let engine = engine_with(generator.clone());

        let reply = engine.respond("Any tips?", None).await;

        assert_eq!(reply, format!("Late but fine.\n\n{CONSULTATION_CTA}"));
        assert_eq!(generator.calls()[1].1, ModelVariant::Fallback);
    }

    #[tokio::test]
    async fn test_blank_input_consumes_slot_but_skips_generator() {
        let generator = MockGenerator::scripted(vec![]);
        let engine = engine_with(generator.clone());

        let reply = engine.respond("   ", None).await;

        assert_eq!(reply, INVALID_QUESTION);
        assert!(generator.calls().is_empty());
        let entry = engine.rate_limiter().entry(DEFAULT_CLIENT_ID).unwrap();
        assert_eq!(entry.count, 1);
    }

    #[tokio::test]
    async fn test_eleventh_request_is_rate_limited_per_client() {
        let engine = engine_with(MockGenerator::scripted(vec![]));
        let question = "What services do you offer?";

        for _ in 0..10 {
            assert_ne!(engine.respond(question, Some("tab-1")).await, RATE_LIMITED);
        }
        assert_eq!(engine.respond(question, Some("tab-1")).await, RATE_LIMITED);
        assert_ne!(engine.respond(question, Some("tab-2")).await, RATE_LIMITED);
    }

    #[tokio::test]
    async fn test_rate_limited_request_never_reaches_generator() {
        let generator = MockGenerator::scripted(vec![]);
        let engine = engine_with(generator.clone());

        for _ in 0..10 {
            engine.respond("", Some("spammer")).await;
        }
        let reply = engine.respond("Something new?", Some("spammer")).await;

        assert_eq!(reply, RATE_LIMITED);
        assert!(generator.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_capped_client_allowed_again_after_window() {
        let engine = engine_with(MockGenerator::scripted(vec![]));
        let question = "What languages do you speak?";

        for _ in 0..10 {
            engine.respond(question, Some("tab")).await;
        }
        assert_eq!(engine.respond(question, Some("tab")).await, RATE_LIMITED);

        tokio::time::advance(Duration::from_secs(61)).await;

        assert_ne!(engine.respond(question, Some("tab")).await, RATE_LIMITED);
        assert_eq!(engine.rate_limiter().entry("tab").unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_missing_and_empty_client_share_default_bucket() {
        let engine = engine_with(MockGenerator::scripted(vec![]));
        engine.respond("What is your current role?", None).await;
        engine.respond("What is your current role?", Some("")).await;

        assert_eq!(engine.rate_limiter().entry(DEFAULT_CLIENT_ID).unwrap().count, 2);
        assert_eq!(engine.rate_limiter().len(), 1);
    }
}
