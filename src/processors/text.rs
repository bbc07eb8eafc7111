// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;

use crate::processors::ProcessorContext;
use crate::traits::{Processor, ProcessorKind, Verdict};

/// Text processor - classifies and transforms free-form text
pub struct TextProcessor {
    ctx: Arc<ProcessorContext>,
}

impl TextProcessor {
    pub fn new(ctx: Arc<ProcessorContext>) -> Self {
        Self { ctx }
    }

    /// Number of segments produced by splitting on a single space.
    ///
    /// Callers rely on the naive split: empty text yields 1, and
    /// consecutive spaces yield counted empty segments. Not
    /// whitespace-collapsing.
    pub fn count_words(&self, text: &str) -> usize {
        text.split(' ').count()
    }

    /// Reverse the text character-wise after logging and a scratch
    /// round-trip.
    pub async fn reverse_text(&self, text: &str) -> String {
        self.ctx.log_operation(self.kind(), "Reversing text").await;

        match self.ctx.scratch_round_trip(text.as_bytes()) {
            Ok((content, _)) => String::from_utf8_lossy(&content).chars().rev().collect(),
            Err(error) => self.ctx.format_error(&error.to_string()),
        }
    }
}

#[async_trait]
impl Processor for TextProcessor {
    async fn validate(&self, data: &str) -> Verdict {
        self.ctx
            .log_operation(self.kind(), "Validating text data")
            .await;
        self.ctx.perform_slow_operation().await;

        // First match wins: the "test" prefix outranks the "error"
        // substring check, so "testerror123" is valid.
        match data {
            d if d.is_empty() => Verdict::Invalid,
            d if d.chars().count() < 5 => Verdict::Invalid,
            d if d.starts_with("test") => Verdict::Valid,
            d if d.contains("error") => Verdict::Invalid,
            _ => Verdict::Valid,
        }
    }

    async fn process(&self, data: &str) -> String {
        self.ctx
            .log_operation(self.kind(), "Processing text data")
            .await;

        let content = match self.ctx.scratch_round_trip(data.as_bytes()) {
            Ok((content, _)) => String::from_utf8_lossy(&content).into_owned(),
            Err(error) => return self.ctx.format_error(&error.to_string()),
        };

        if data.starts_with("test") {
            format!("processed: {}", content.to_uppercase())
        } else {
            format!("processed: {}", content.to_lowercase())
        }
    }

    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MemoryLogSink;
    use crate::scratch::MemoryScratch;
    use std::time::Duration;

    fn text_processor() -> (TextProcessor, Arc<MemoryLogSink>) {
        let sink = Arc::new(MemoryLogSink::new());
        let scratch = Arc::new(MemoryScratch::new());
        let ctx = Arc::new(
            ProcessorContext::new(sink.clone(), scratch).with_slow_op_delay(Duration::ZERO),
        );
        (TextProcessor::new(ctx), sink)
    }

    #[tokio::test]
    async fn validate_rejects_empty_input() {
        let (processor, _) = text_processor();
        assert_eq!(processor.validate("").await, Verdict::Invalid);
    }

    #[tokio::test]
    async fn validate_rejects_short_input() {
        let (processor, _) = text_processor();
        assert_eq!(processor.validate("hi").await, Verdict::Invalid);
        assert_eq!(processor.validate("abcd").await, Verdict::Invalid);
    }

    #[tokio::test]
    async fn validate_accepts_ordinary_text() {
        let (processor, _) = text_processor();
        assert_eq!(processor.validate("hello world").await, Verdict::Valid);
    }

    #[tokio::test]
    async fn validate_rejects_error_mentions() {
        let (processor, _) = text_processor();
        assert_eq!(processor.validate("an error here").await, Verdict::Invalid);
    }

    #[tokio::test]
    async fn test_prefix_outranks_error_substring() {
        let (processor, _) = text_processor();

        // Rule order is load-bearing: the prefix check runs first.
        assert_eq!(processor.validate("testerror").await, Verdict::Valid);
        assert_eq!(processor.validate("testerror123").await, Verdict::Valid);
    }

    #[tokio::test]
    async fn process_uppercases_test_inputs() {
        let (processor, _) = text_processor();
        assert_eq!(processor.process("testABC").await, "processed: TESTABC");
    }

    #[tokio::test]
    async fn process_lowercases_other_inputs() {
        let (processor, _) = text_processor();
        assert_eq!(
            processor.process("Hello World").await,
            "processed: hello world"
        );
    }

    #[tokio::test]
    async fn round_trip_preserves_content_before_transform() {
        let (processor, _) = text_processor();

        // Already-lowercase input comes back byte-for-byte.
        assert_eq!(
            processor.process("plain input").await,
            "processed: plain input"
        );
    }

    #[test]
    fn count_words_uses_naive_split() {
        let (processor, _) = text_processor();

        assert_eq!(processor.count_words("a b  c"), 4);
        assert_eq!(processor.count_words(""), 1);
        assert_eq!(processor.count_words("one"), 1);
        assert_eq!(processor.count_words("one two three"), 3);
    }

    #[tokio::test]
    async fn reverse_text_reverses_characters() {
        let (processor, _) = text_processor();
        assert_eq!(processor.reverse_text("hello").await, "olleh");
    }

    #[tokio::test]
    async fn each_call_logs_exactly_one_tagged_line() {
        let (processor, sink) = text_processor();

        processor.validate("hello world").await;
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("][text] Validating text data"));

        processor.process("hello world").await;
        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("][text] Processing text data"));
    }
}
