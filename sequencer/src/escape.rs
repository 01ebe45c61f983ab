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


use crate::consts::{CSI_BRACKET, ESC};
use crate::{SequencerError, SequencerResult};
use std::str::FromStr;

/// How the ESC byte is rendered at the start of a sequence.
///
/// `Byte` emits the real control byte and is what a terminal understands. The
/// `Octal` and `Hexadecimal` styles emit the printable spellings `\033` and
/// `\x1B`, which is useful when a sequence has to be logged, embedded in
/// source code, or shown to a person. The choice never changes which control
/// function a sequence invokes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EscapeCharacter {
    /// The raw 0x1B byte.
    #[default]
    Byte,
    /// The four characters `\033`.
    Octal,
    /// The four characters `\x1B`.
    Hexadecimal,
}

impl EscapeCharacter {
    /// The text used in place of the ESC byte.
    pub fn as_str(&self) -> &'static str {
        match self {
            EscapeCharacter::Byte => "\x1b",
            EscapeCharacter::Octal => "\\033",
            EscapeCharacter::Hexadecimal => "\\x1B",
        }
    }

    /// The Control Sequence Introducer (`ESC [`) in this rendering.
    pub fn introducer(&self) -> String {
        let mut csi = String::with_capacity(5);
        csi.push_str(self.as_str());
        csi.push(char::from(CSI_BRACKET));
        csi
    }

    /// Whether this style emits the raw control byte.
    pub fn is_raw(&self) -> bool {
        matches!(self, EscapeCharacter::Byte)
    }
}

impl std::fmt::Display for EscapeCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscapeCharacter::Byte => write!(f, "byte"),
            EscapeCharacter::Octal => write!(f, "octal"),
            EscapeCharacter::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

impl FromStr for EscapeCharacter {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte" | "raw" => Ok(EscapeCharacter::Byte),
            "octal" | "oct" => Ok(EscapeCharacter::Octal),
            "hexadecimal" | "hex" => Ok(EscapeCharacter::Hexadecimal),
            _ => Err(SequencerError::invalid_option("escape_character", s)),
        }
    }
}

/// Re-renders every raw ESC byte in `sequence` using `style`.
///
/// Sequences built with [`EscapeCharacter::Byte`] can be turned into their
/// printable form after the fact. Input that contains no ESC byte is returned
/// unchanged.
pub fn escape_sequence(sequence: &str, style: EscapeCharacter) -> String {
    if style.is_raw() {
        return sequence.to_string();
    }
    sequence.replace(char::from(ESC), style.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introducer_renderings() {
        assert_eq!(EscapeCharacter::Byte.introducer(), "\x1b[");
        assert_eq!(EscapeCharacter::Octal.introducer(), "\\033[");
        assert_eq!(EscapeCharacter::Hexadecimal.introducer(), "\\x1B[");
    }

    #[test]
    fn test_textual_introducers_are_five_chars() {
        assert_eq!(EscapeCharacter::Octal.introducer().len(), 5);
        assert_eq!(EscapeCharacter::Hexadecimal.introducer().len(), 5);
    }

    #[test]
    fn test_escape_sequence() {
        assert_eq!(escape_sequence("\x1b[3A", EscapeCharacter::Octal), "\\033[3A");
        assert_eq!(escape_sequence("\x1bc", EscapeCharacter::Hexadecimal), "\\x1Bc");
        assert_eq!(escape_sequence("\x1b[3A", EscapeCharacter::Byte), "\x1b[3A");
        assert_eq!(escape_sequence("plain", EscapeCharacter::Octal), "plain");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HEX".parse::<EscapeCharacter>().unwrap(), EscapeCharacter::Hexadecimal);
        assert_eq!("octal".parse::<EscapeCharacter>().unwrap(), EscapeCharacter::Octal);
        assert!("binary".parse::<EscapeCharacter>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for style in [
            EscapeCharacter::Byte,
            EscapeCharacter::Octal,
            EscapeCharacter::Hexadecimal,
        ] {
            assert_eq!(style.to_string().parse::<EscapeCharacter>().unwrap(), style);
        }
    }
}
