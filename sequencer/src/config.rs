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


use crate::{Delimiter, EscapeCharacter, SequencerError, SequencerResult};
use std::str::FromStr;

/// Generation settings held by an [`AnsiSequencer`](crate::AnsiSequencer).
///
/// The configuration is read on every call and never written by sequence
/// construction. Changing it while another thread reads it is the caller's
/// responsibility; the struct is `Copy` so each thread can hold its own.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SequencerConfig {
    /// Rendering of the ESC byte at the start of each sequence
    pub escape_character: EscapeCharacter,
    /// Separator for 8-bit and 24-bit color parameters
    pub color_delimiter: Delimiter,
    /// Control function used for absolute cursor moves
    pub cursor_addressing: CursorAddressing,
    /// Sequence family used to save and restore the cursor
    pub cursor_memory: CursorMemory,
}

impl SequencerConfig {
    /// Raw ESC byte, colon delimited colors, CUP addressing and DEC cursor memory.
    pub fn standard() -> SequencerConfig {
        SequencerConfig {
            escape_character: EscapeCharacter::Byte,
            color_delimiter: Delimiter::Colon,
            cursor_addressing: CursorAddressing::CursorPosition,
            cursor_memory: CursorMemory::Fp,
        }
    }
    /// Semicolon delimited colors, HVP addressing and SCO cursor memory, for
    /// terminals that predate the colon and DEC forms.
    pub fn legacy() -> SequencerConfig {
        SequencerConfig {
            escape_character: EscapeCharacter::Byte,
            color_delimiter: Delimiter::Semicolon,
            cursor_addressing: CursorAddressing::HorizontalVerticalPosition,
            cursor_memory: CursorMemory::Fe,
        }
    }
    /// Standard settings rendered with a printable `\033` escape, for logging
    /// or embedding sequences in source text.
    pub fn readable() -> SequencerConfig {
        SequencerConfig {
            escape_character: EscapeCharacter::Octal,
            ..SequencerConfig::standard()
        }
    }

    /// Set the ESC rendering
    pub fn with_escape_character(mut self, escape_character: EscapeCharacter) -> Self {
        self.escape_character = escape_character;
        self
    }

    /// Set the color parameter delimiter
    pub fn with_color_delimiter(mut self, color_delimiter: Delimiter) -> Self {
        self.color_delimiter = color_delimiter;
        self
    }

    /// Set the absolute cursor addressing function
    pub fn with_cursor_addressing(mut self, cursor_addressing: CursorAddressing) -> Self {
        self.cursor_addressing = cursor_addressing;
        self
    }

    /// Set the cursor save/restore family
    pub fn with_cursor_memory(mut self, cursor_memory: CursorMemory) -> Self {
        self.cursor_memory = cursor_memory;
        self
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Control function used by
/// [`AnsiSequencer::move_cursor_to`](crate::AnsiSequencer::move_cursor_to).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CursorAddressing {
    /// CUP, `ESC[n;mH`, an editor function.
    #[default]
    CursorPosition,
    /// HVP, `ESC[n;mf`, a format effector.
    HorizontalVerticalPosition,
}

impl std::fmt::Display for CursorAddressing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorAddressing::CursorPosition => write!(f, "cup"),
            CursorAddressing::HorizontalVerticalPosition => write!(f, "hvp"),
        }
    }
}

impl FromStr for CursorAddressing {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cup" | "cursor position" => Ok(CursorAddressing::CursorPosition),
            "hvp" | "horizontal vertical position" => {
                Ok(CursorAddressing::HorizontalVerticalPosition)
            }
            _ => Err(SequencerError::invalid_option("cursor_addressing", s)),
        }
    }
}

/// Sequence family used to save and restore the cursor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CursorMemory {
    /// SCP/RCP, `ESC[s` and `ESC[u`. Position only.
    Fe,
    /// DECSC/DECRC, `ESC 7` and `ESC 8`. Position, shift state and attributes.
    #[default]
    Fp,
}

impl std::fmt::Display for CursorMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorMemory::Fe => write!(f, "fe"),
            CursorMemory::Fp => write!(f, "fp"),
        }
    }
}

impl FromStr for CursorMemory {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fe" | "sco" | "scp" => Ok(CursorMemory::Fe),
            "fp" | "dec" | "decsc" => Ok(CursorMemory::Fp),
            _ => Err(SequencerError::invalid_option("cursor_memory", s)),
        }
    }
}
