//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Error types for the sequencer crate.
//!
//! Sequence builders and the validator are total and never fail. Errors only
//! arise at the edges: parsing names and colors from text, and writing
//! encoded sequences through the codec.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`SequencerError`].
pub type SequencerResult<T> = Result<T, SequencerError>;

/// Errors that can occur when parsing sequencer inputs or encoding output.
#[derive(Debug, Error)]
pub enum SequencerError {
    /// I/O error raised while writing encoded sequences.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The color name is not part of the named color table.
    #[error("Unknown color name '{0}'")]
    UnknownColorName(String),

    /// A hexadecimal color string could not be parsed.
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHexColor {
        /// The rejected input
        value: String,
        /// Description of why it was rejected
        reason: String,
    },

    /// No control function matches the given mnemonic or name.
    #[error("Unknown control function '{0}'")]
    UnknownControlFunction(String),

    /// A configuration option was given a value it does not recognise.
    #[error("Invalid value '{value}' for option '{name}'")]
    InvalidOption {
        /// Name of the option being parsed
        name: &'static str,
        /// The rejected value
        value: String,
    },
}

impl SequencerError {
    pub(crate) fn invalid_option(name: &'static str, value: &str) -> Self {
        SequencerError::InvalidOption {
            name,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_color_name() {
        let err = SequencerError::UnknownColorName("Mauve".to_string());
        assert_eq!(err.to_string(), "Unknown color name 'Mauve'");
    }

    #[test]
    fn test_display_invalid_option() {
        let err = SequencerError::invalid_option("delimiter", "comma");
        assert_eq!(
            err.to_string(),
            "Invalid value 'comma' for option 'delimiter'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::other("broken pipe");
        let err: SequencerError = io.into();
        assert!(matches!(err, SequencerError::Io(_)));
    }
}
