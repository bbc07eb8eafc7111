use std::sync::Arc;

use crate::errors::FactoryError;
use crate::observability::messages::factory::{ProcessorCreated, UnknownKindRequested};
use crate::observability::messages::StructuredLog;
use crate::processors::{FileProcessor, ProcessorContext, TextProcessor};
use crate::traits::Processor;

/// Factory for creating processor instances by kind name
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Create a processor instance for a kind name
    ///
    /// The kind determines which variant is created:
    /// - "text" -> TextProcessor
    /// - "file" -> FileProcessor
    pub fn create(
        kind: &str,
        ctx: Arc<ProcessorContext>,
    ) -> Result<Arc<dyn Processor>, FactoryError> {
        let processor: Arc<dyn Processor> = match kind {
            "text" => Arc::new(TextProcessor::new(ctx)),
            "file" => Arc::new(FileProcessor::new(ctx)),
            _ => {
                UnknownKindRequested { kind }.log();
                return Err(FactoryError::UnknownKind {
                    kind: kind.to_string(),
                });
            }
        };

        ProcessorCreated { kind }.log();
        Ok(processor)
    }

    /// Create a text processor directly
    pub fn create_text_processor(ctx: Arc<ProcessorContext>) -> TextProcessor {
        TextProcessor::new(ctx)
    }

    /// Create a file processor directly
    pub fn create_file_processor(ctx: Arc<ProcessorContext>) -> FileProcessor {
        FileProcessor::new(ctx)
    }

    /// List all known kind names
    pub fn available_kinds() -> Vec<&'static str> {
        vec!["text", "file"]
    }

    /// Check if a kind name resolves to a processor
    pub fn is_kind_available(kind: &str) -> bool {
        Self::available_kinds().contains(&kind)
    }
}
