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


//! Terminator table for the supported control functions.
//!
//! Every sequence ends in a single byte that both closes it and selects the
//! control function. Terminators are grouped into three families by the
//! introducer they follow:
//!
//! | Family | Introducer | Terminators                                   |
//! |--------|------------|-----------------------------------------------|
//! | CSI    | `ESC [`    | `A B C D E F G H J K S T f m s u`             |
//! | Fs     | `ESC`      | `c`                                           |
//! | Fp     | `ESC`      | `7 8`                                         |
//!
//! Each family is its own type so a CSI terminator cannot be handed to an Fs
//! or Fp builder.

use crate::{SequencerError, SequencerResult};
use std::str::FromStr;

/// Introducer family a terminator belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequenceFamily {
    /// Control Sequence Introducer sequences, `ESC [ ... final`.
    Csi,
    /// Independent control functions, `ESC final`.
    Fs,
    /// Private-use control functions, `ESC final`.
    Fp,
}

/// Control functions closed by a CSI terminator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CsiFunction {
    /// CUU - Cursor Up
    CursorUp,
    /// CUD - Cursor Down
    CursorDown,
    /// CUF - Cursor Forward
    CursorForward,
    /// CUB - Cursor Back
    CursorBack,
    /// CNL - Cursor Next Line
    CursorNextLine,
    /// CPL - Cursor Previous Line
    CursorPreviousLine,
    /// CHA - Cursor Horizontal Absolute
    CursorHorizontalAbsolute,
    /// CUP - Cursor Position
    CursorPosition,
    /// ED - Erase in Display
    EraseInDisplay,
    /// EL - Erase in Line
    EraseInLine,
    /// SU - Scroll Up
    ScrollUp,
    /// SD - Scroll Down
    ScrollDown,
    /// HVP - Horizontal Vertical Position
    HorizontalVerticalPosition,
    /// SGR - Select Graphic Rendition
    SelectGraphicRendition,
    /// SCP - Save Current Cursor Position (SCOSC)
    SaveCursorPosition,
    /// RCP - Restore Saved Cursor Position (SCORC)
    RestoreCursorPosition,
}

impl CsiFunction {
    /// Every CSI control function, in terminator table order.
    pub const ALL: [CsiFunction; 16] = [
        CsiFunction::CursorUp,
        CsiFunction::CursorDown,
        CsiFunction::CursorForward,
        CsiFunction::CursorBack,
        CsiFunction::CursorNextLine,
        CsiFunction::CursorPreviousLine,
        CsiFunction::CursorHorizontalAbsolute,
        CsiFunction::CursorPosition,
        CsiFunction::EraseInDisplay,
        CsiFunction::EraseInLine,
        CsiFunction::ScrollUp,
        CsiFunction::ScrollDown,
        CsiFunction::HorizontalVerticalPosition,
        CsiFunction::SelectGraphicRendition,
        CsiFunction::SaveCursorPosition,
        CsiFunction::RestoreCursorPosition,
    ];

    /// The byte closing a sequence for this function.
    pub fn terminator(&self) -> u8 {
        match self {
            CsiFunction::CursorUp => b'A',
            CsiFunction::CursorDown => b'B',
            CsiFunction::CursorForward => b'C',
            CsiFunction::CursorBack => b'D',
            CsiFunction::CursorNextLine => b'E',
            CsiFunction::CursorPreviousLine => b'F',
            CsiFunction::CursorHorizontalAbsolute => b'G',
            CsiFunction::CursorPosition => b'H',
            CsiFunction::EraseInDisplay => b'J',
            CsiFunction::EraseInLine => b'K',
            CsiFunction::ScrollUp => b'S',
            CsiFunction::ScrollDown => b'T',
            CsiFunction::HorizontalVerticalPosition => b'f',
            CsiFunction::SelectGraphicRendition => b'm',
            CsiFunction::SaveCursorPosition => b's',
            CsiFunction::RestoreCursorPosition => b'u',
        }
    }

    /// Short ECMA-48 / DEC mnemonic, e.g. `CUU`.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            CsiFunction::CursorUp => "CUU",
            CsiFunction::CursorDown => "CUD",
            CsiFunction::CursorForward => "CUF",
            CsiFunction::CursorBack => "CUB",
            CsiFunction::CursorNextLine => "CNL",
            CsiFunction::CursorPreviousLine => "CPL",
            CsiFunction::CursorHorizontalAbsolute => "CHA",
            CsiFunction::CursorPosition => "CUP",
            CsiFunction::EraseInDisplay => "ED",
            CsiFunction::EraseInLine => "EL",
            CsiFunction::ScrollUp => "SU",
            CsiFunction::ScrollDown => "SD",
            CsiFunction::HorizontalVerticalPosition => "HVP",
            CsiFunction::SelectGraphicRendition => "SGR",
            CsiFunction::SaveCursorPosition => "SCP",
            CsiFunction::RestoreCursorPosition => "RCP",
        }
    }

    /// Human readable name, e.g. `Cursor Up`.
    pub fn name(&self) -> &'static str {
        match self {
            CsiFunction::CursorUp => "Cursor Up",
            CsiFunction::CursorDown => "Cursor Down",
            CsiFunction::CursorForward => "Cursor Forward",
            CsiFunction::CursorBack => "Cursor Back",
            CsiFunction::CursorNextLine => "Cursor Next Line",
            CsiFunction::CursorPreviousLine => "Cursor Previous Line",
            CsiFunction::CursorHorizontalAbsolute => "Cursor Horizontal Absolute",
            CsiFunction::CursorPosition => "Cursor Position",
            CsiFunction::EraseInDisplay => "Erase in Display",
            CsiFunction::EraseInLine => "Erase in Line",
            CsiFunction::ScrollUp => "Scroll Up",
            CsiFunction::ScrollDown => "Scroll Down",
            CsiFunction::HorizontalVerticalPosition => "Horizontal Vertical Position",
            CsiFunction::SelectGraphicRendition => "Select Graphic Rendition",
            CsiFunction::SaveCursorPosition => "Save Current Cursor Position",
            CsiFunction::RestoreCursorPosition => "Restore Saved Cursor Position",
        }
    }

    /// Looks up the CSI function closed by `byte`.
    pub fn from_terminator(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.terminator() == byte)
    }
}

/// Independent control functions (Fs), written as `ESC final`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FsFunction {
    /// RIS - Reset to Initial State
    ResetToInitialState,
}

impl FsFunction {
    /// Every Fs control function.
    pub const ALL: [FsFunction; 1] = [FsFunction::ResetToInitialState];

    /// The byte following `ESC`.
    pub fn terminator(&self) -> u8 {
        match self {
            FsFunction::ResetToInitialState => b'c',
        }
    }

    /// Short mnemonic, e.g. `RIS`.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            FsFunction::ResetToInitialState => "RIS",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FsFunction::ResetToInitialState => "Reset to Initial State",
        }
    }
}

/// Private-use control functions (Fp), written as `ESC final`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FpFunction {
    /// DECSC - DEC Save Cursor
    SaveCursor,
    /// DECRC - DEC Restore Cursor
    RestoreCursor,
}

impl FpFunction {
    /// Every Fp control function.
    pub const ALL: [FpFunction; 2] = [FpFunction::SaveCursor, FpFunction::RestoreCursor];

    /// The byte following `ESC`.
    pub fn terminator(&self) -> u8 {
        match self {
            FpFunction::SaveCursor => b'7',
            FpFunction::RestoreCursor => b'8',
        }
    }

    /// Short mnemonic, e.g. `DECSC`.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            FpFunction::SaveCursor => "DECSC",
            FpFunction::RestoreCursor => "DECRC",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FpFunction::SaveCursor => "DEC Save Cursor",
            FpFunction::RestoreCursor => "DEC Restore Cursor",
        }
    }
}

/// A terminator tagged with the family it belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Closes a `ESC [` sequence.
    Csi(CsiFunction),
    /// Follows a bare `ESC` as an independent function.
    Fs(FsFunction),
    /// Follows a bare `ESC` as a private-use function.
    Fp(FpFunction),
}

impl Terminator {
    /// The terminating byte.
    pub fn byte(&self) -> u8 {
        match self {
            Terminator::Csi(f) => f.terminator(),
            Terminator::Fs(f) => f.terminator(),
            Terminator::Fp(f) => f.terminator(),
        }
    }

    /// The terminating byte as a `char`.
    pub fn to_char(&self) -> char {
        char::from(self.byte())
    }

    /// Which introducer family this terminator follows.
    pub fn family(&self) -> SequenceFamily {
        match self {
            Terminator::Csi(_) => SequenceFamily::Csi,
            Terminator::Fs(_) => SequenceFamily::Fs,
            Terminator::Fp(_) => SequenceFamily::Fp,
        }
    }

    /// Short mnemonic of the underlying control function.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Terminator::Csi(f) => f.mnemonic(),
            Terminator::Fs(f) => f.mnemonic(),
            Terminator::Fp(f) => f.mnemonic(),
        }
    }

    /// Human readable name of the underlying control function.
    pub fn name(&self) -> &'static str {
        match self {
            Terminator::Csi(f) => f.name(),
            Terminator::Fs(f) => f.name(),
            Terminator::Fp(f) => f.name(),
        }
    }

    /// Every terminator across all three families.
    pub fn all() -> impl Iterator<Item = Terminator> {
        CsiFunction::ALL
            .into_iter()
            .map(Terminator::Csi)
            .chain(FsFunction::ALL.into_iter().map(Terminator::Fs))
            .chain(FpFunction::ALL.into_iter().map(Terminator::Fp))
    }
}

impl From<CsiFunction> for Terminator {
    fn from(value: CsiFunction) -> Self {
        Terminator::Csi(value)
    }
}

impl From<FsFunction> for Terminator {
    fn from(value: FsFunction) -> Self {
        Terminator::Fs(value)
    }
}

impl From<FpFunction> for Terminator {
    fn from(value: FpFunction) -> Self {
        Terminator::Fp(value)
    }
}

impl std::fmt::Display for Terminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Looks up a control function by mnemonic (`SD`) or name (`Scroll Down`),
/// ignoring ASCII case.
impl FromStr for Terminator {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        let needle = s.trim();
        Terminator::all()
            .find(|t| {
                t.mnemonic().eq_ignore_ascii_case(needle) || t.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| SequencerError::UnknownControlFunction(s.to_string()))
    }
}

macro_rules! family_from_str {
    ($function:ty, $variant:ident) => {
        impl FromStr for $function {
            type Err = SequencerError;

            fn from_str(s: &str) -> SequencerResult<Self> {
                match s.parse::<Terminator>() {
                    Ok(Terminator::$variant(function)) => Ok(function),
                    _ => Err(SequencerError::UnknownControlFunction(s.to_string())),
                }
            }
        }
    };
}

family_from_str!(CsiFunction, Csi);
family_from_str!(FsFunction, Fs);
family_from_str!(FpFunction, Fp);
