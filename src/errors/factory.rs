// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur when resolving a processor kind name
///
/// This is the only structural error the core surfaces; classification
/// failures are `Verdict` values, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// The requested kind is not one of the known processor variants
    UnknownKind {
        /// The kind name that failed to resolve
        kind: String,
    },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::UnknownKind { kind } => {
                write!(f, "Unknown processor kind: '{}'", kind)
            }
        }
    }
}

impl std::error::Error for FactoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_names_the_offender() {
        let error = FactoryError::UnknownKind {
            kind: "image".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown processor kind: 'image'");
    }
}
