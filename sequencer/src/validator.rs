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


//! Well-formedness check for CSI sequences.
//!
//! Validation runs in two stages:
//!
//! 1. A character-class gate. Everything after the first byte must lie in
//!    the printable range `0x20..=0x7E`, so a stray CR, LF or FF anywhere in
//!    the sequence rejects it even if the rest would match.
//! 2. A grammar match of the whole input, including the leading ESC, against
//!    four forms tried in order:
//!
//! | Form              | Shape                        | Example        |
//! |-------------------|------------------------------|----------------|
//! | No parameter      | `ESC [ L`                    | `ESC[s`        |
//! | Single parameter  | `ESC [ n L`                  | `ESC[5A`       |
//! | Two parameters    | `ESC [ n ; m L`              | `ESC[11;23H`   |
//! | Multi parameter   | `ESC [ (n ;+)+ n L`          | `ESC[38;2;;1m` |
//!
//! where `n` is one or more decimal digits and `L` a single ASCII letter.
//! Empty slots (`;;`) are tolerated inside the multi-parameter form but the
//! list must end in digits. Colon sub-parameters and private-mode prefixes
//! are not part of this grammar, and SGR-specific checks are not performed.
//!
//! Both checks are total over all inputs and never panic.

use crate::consts::PRINTABLE_RANGE;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// The grammar form a valid CSI sequence matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CsiForm {
    /// `ESC [ L`
    NoParameter,
    /// `ESC [ n L`
    SingleParameter,
    /// `ESC [ n ; m L`
    TwoParameters,
    /// `ESC [ (n ;+)+ n L`
    MultiParameter,
}

static CSI_GRAMMAR: LazyLock<[(CsiForm, Regex); 4]> = LazyLock::new(|| {
    [
        (CsiForm::NoParameter, r"^\x1b\[[a-zA-Z]$"),
        (CsiForm::SingleParameter, r"^\x1b\[[0-9]+[a-zA-Z]$"),
        (CsiForm::TwoParameters, r"^\x1b\[[0-9]+;[0-9]+[a-zA-Z]$"),
        (CsiForm::MultiParameter, r"^\x1b\[(?:[0-9]+;+)+[0-9]+[a-zA-Z]$"),
    ]
    .map(|(form, pattern)| {
        // Patterns are fixed at compile time; a failure here is a programming error.
        (form, Regex::new(pattern).expect("CSI grammar pattern is valid"))
    })
});

/// Returns `true` when `sequence` is a well-formed CSI sequence.
///
/// # Examples
///
/// ```rust
/// use termseq_sequencer::is_valid;
///
/// assert!(is_valid("\x1b[23;24f"));
/// assert!(is_valid("\x1b[38;2;;;0;0;0;0;1111m"));
/// assert!(!is_valid("\x1b[2;;F"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(sequence: &str) -> bool {
    classify(sequence).is_some()
}

/// Returns the first grammar form `sequence` matches, or `None` when it is
/// not a well-formed CSI sequence.
pub fn classify(sequence: &str) -> Option<CsiForm> {
    let bytes = sequence.as_bytes();
    if bytes.is_empty() {
        trace!("rejected: empty sequence");
        return None;
    }

    if let Some(offset) = bytes[1..]
        .iter()
        .position(|b| !PRINTABLE_RANGE.contains(b))
    {
        trace!(
            offset = offset + 1,
            byte = bytes[offset + 1],
            "rejected: byte outside printable range"
        );
        return None;
    }

    let form = CSI_GRAMMAR
        .iter()
        .find(|(_, grammar)| grammar.is_match(sequence))
        .map(|(form, _)| *form);

    match form {
        Some(form) => trace!(?form, "accepted"),
        None => trace!("rejected: no grammar form matched"),
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid(""));
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_known_valid_sequences() {
        assert!(is_valid("\x1b[s"));
        assert!(is_valid("\x1b[0m"));
        assert!(is_valid("\x1b[23;24f"));
        assert!(is_valid("\x1b[38;2;;;0;0;0;0;1111m"));
    }

    #[test]
    fn test_known_invalid_sequences() {
        let rejected = [
            "\x1b[!",
            "\x1b[_A",
            "\x1b[-1C",
            "\x1b[2;;F",
            "\x1b[1;2 222m",
            "\x1b[38;2; ; ;0;0;0;0;1111m",
            "\x1b[38;2;;;0;0;0;0;m",
            "\x1b[u\r\x0c",
            "\x1b[\nu",
            "\x1b[1\x0cA",
        ];
        for sequence in rejected {
            assert!(!is_valid(sequence), "{:?} should be rejected", sequence);
        }
    }

    #[test]
    fn test_classify_forms() {
        assert_eq!(classify("\x1b[u"), Some(CsiForm::NoParameter));
        assert_eq!(classify("\x1b[5A"), Some(CsiForm::SingleParameter));
        assert_eq!(classify("\x1b[11;23H"), Some(CsiForm::TwoParameters));
        assert_eq!(classify("\x1b[1;2;3m"), Some(CsiForm::MultiParameter));
        assert_eq!(classify("\x1b[1;;3m"), Some(CsiForm::MultiParameter));
    }

    #[test]
    fn test_requires_escape_byte() {
        assert!(!is_valid("[5A"));
        assert!(!is_valid("\\033[5A"));
        assert!(!is_valid("x[5A"));
    }

    #[test]
    fn test_single_letter_terminator() {
        assert!(!is_valid("\x1b[5AB"));
        assert!(!is_valid("\x1b[5"));
        assert!(!is_valid("\x1b["));
        assert!(!is_valid("\x1b"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid("\x1b[5\u{e9}"));
        assert!(!is_valid("\u{e9}[5A"));
        assert!(!is_valid("\x1b[5A\x7f"));
    }

    #[test]
    fn test_colon_parameters_not_in_grammar() {
        assert!(!is_valid("\x1b[38:5:200m"));
    }

    #[traced_test]
    #[test]
    fn test_logs_offending_byte() {
        assert!(!is_valid("\x1b[\nu"));
        assert!(logs_contain("byte outside printable range"));
        assert!(logs_contain("offset=2"));
    }

    #[traced_test]
    #[test]
    fn test_logs_accepted_form() {
        assert!(is_valid("\x1b[11;23H"));
        assert!(logs_contain("TwoParameters"));
    }

    #[traced_test]
    #[test]
    fn test_logs_grammar_miss() {
        assert!(!is_valid("\x1b[2;;F"));
        assert!(logs_contain("no grammar form matched"));
    }
}
