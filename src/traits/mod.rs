pub mod processor;

pub use processor::{Processor, ProcessorKind, Verdict};
