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


//! Color value types consumed by the SGR builder.
//!
//! Three kinds of color are supported:
//!
//! - **4-bit named colors** ([`ForegroundColor`], [`BackgroundColor`]): the
//!   16 standard/bright terminal colors plus the terminal default, written as
//!   a single SGR parameter (`31`, `104`, ...).
//! - **8-bit palette colors** ([`Color::Palette`]): an index into the
//!   256-entry xterm palette, written as `38;5;n` / `48;5;n`.
//! - **24-bit colors** ([`Color::Rgb`]): independent red, green and blue
//!   components, written as `38;2;r;g;b` / `48;2;r;g;b`.

use crate::{SequencerError, SequencerResult};
use std::str::FromStr;

/// Names of the fixed colors that [`RgbColor::named`] can resolve.
///
/// These are the sixteen basic colors shared by HTML 4 and the VGA palette.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorName {
    /// `#000000`
    #[default]
    Black,
    /// `#C0C0C0`
    Silver,
    /// `#808080`
    Gray,
    /// `#FFFFFF`
    White,
    /// `#800000`
    Maroon,
    /// `#FF0000`
    Red,
    /// `#800080`
    Purple,
    /// `#FF00FF`
    Fuchsia,
    /// `#008000`
    Green,
    /// `#00FF00`
    Lime,
    /// `#808000`
    Olive,
    /// `#FFFF00`
    Yellow,
    /// `#000080`
    Navy,
    /// `#0000FF`
    Blue,
    /// `#008080`
    Teal,
    /// `#00FFFF`
    Aqua,
}

impl ColorName {
    /// Every named color.
    pub const ALL: [ColorName; 16] = [
        ColorName::Black,
        ColorName::Silver,
        ColorName::Gray,
        ColorName::White,
        ColorName::Maroon,
        ColorName::Red,
        ColorName::Purple,
        ColorName::Fuchsia,
        ColorName::Green,
        ColorName::Lime,
        ColorName::Olive,
        ColorName::Yellow,
        ColorName::Navy,
        ColorName::Blue,
        ColorName::Teal,
        ColorName::Aqua,
    ];

    /// The `(red, green, blue)` components of this color.
    pub fn components(&self) -> (u8, u8, u8) {
        match self {
            ColorName::Black => (0, 0, 0),
            ColorName::Silver => (192, 192, 192),
            ColorName::Gray => (128, 128, 128),
            ColorName::White => (255, 255, 255),
            ColorName::Maroon => (128, 0, 0),
            ColorName::Red => (255, 0, 0),
            ColorName::Purple => (128, 0, 128),
            ColorName::Fuchsia => (255, 0, 255),
            ColorName::Green => (0, 128, 0),
            ColorName::Lime => (0, 255, 0),
            ColorName::Olive => (128, 128, 0),
            ColorName::Yellow => (255, 255, 0),
            ColorName::Navy => (0, 0, 128),
            ColorName::Blue => (0, 0, 255),
            ColorName::Teal => (0, 128, 128),
            ColorName::Aqua => (0, 255, 255),
        }
    }

    /// The display name of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "Black",
            ColorName::Silver => "Silver",
            ColorName::Gray => "Gray",
            ColorName::White => "White",
            ColorName::Maroon => "Maroon",
            ColorName::Red => "Red",
            ColorName::Purple => "Purple",
            ColorName::Fuchsia => "Fuchsia",
            ColorName::Green => "Green",
            ColorName::Lime => "Lime",
            ColorName::Olive => "Olive",
            ColorName::Yellow => "Yellow",
            ColorName::Navy => "Navy",
            ColorName::Blue => "Blue",
            ColorName::Teal => "Teal",
            ColorName::Aqua => "Aqua",
        }
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("grey") {
            return Ok(ColorName::Gray);
        }
        ColorName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SequencerError::UnknownColorName(s.to_string()))
    }
}

/// A 24-bit color. Immutable once constructed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a color from its components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Resolves a color from the named color table.
    pub fn named(name: ColorName) -> Self {
        let (red, green, blue) = name.components();
        Self::new(red, green, blue)
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    pub fn from_hex(value: &str) -> SequencerResult<Self> {
        let invalid = |reason: &str| SequencerError::InvalidHexColor {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("contains a non-hexadecimal character"));
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|e| invalid(&e.to_string()));
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #RGB expands each digit, so #0F8 becomes #00FF88
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            n => Err(invalid(&format!("expected 3 or 6 digits, found {}", n))),
        }
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Red component.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green component.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue component.
    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl From<ColorName> for RgbColor {
    fn from(name: ColorName) -> Self {
        RgbColor::named(name)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        RgbColor::new(red, green, blue)
    }
}

/// Which layer of a character cell a color applies to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorPlane {
    /// Text color, selected by SGR `38`.
    #[default]
    Foreground,
    /// Cell color, selected by SGR `48`.
    Background,
}

/// An extended color, either a palette index or a 24-bit value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A color number from 0 to 255 in the xterm 256-color palette.
    ///
    /// - 0-7: standard colors (as `30`-`37`)
    /// - 8-15: high intensity colors (as `90`-`97`)
    /// - 16-231: 6x6x6 cube, `16 + 36r + 6g + b` with `0 <= r,g,b <= 5`
    /// - 232-255: grayscale from black to white in 24 steps
    Palette(u8),
    /// A 24-bit color as specified by ISO-8613-3.
    Rgb(RgbColor),
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self {
        Color::Rgb(value)
    }
}

impl From<ColorName> for Color {
    fn from(value: ColorName) -> Self {
        Color::Rgb(RgbColor::named(value))
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::Palette(value)
    }
}

/// 4-bit foreground colors (SGR `30`-`37`, `39`, `90`-`97`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForegroundColor {
    /// `30`
    Black = 30,
    /// `31`
    Red = 31,
    /// `32`
    Green = 32,
    /// `33`
    Yellow = 33,
    /// `34`
    Blue = 34,
    /// `35`
    Magenta = 35,
    /// `36`
    Cyan = 36,
    /// `37`
    White = 37,
    /// `39`, the terminal's own foreground.
    #[default]
    Default = 39,
    /// `90`
    Gray = 90,
    /// `91`
    BrightRed = 91,
    /// `92`
    BrightGreen = 92,
    /// `93`
    BrightYellow = 93,
    /// `94`
    BrightBlue = 94,
    /// `95`
    BrightMagenta = 95,
    /// `96`
    BrightCyan = 96,
    /// `97`
    BrightWhite = 97,
}

impl ForegroundColor {
    /// The SGR parameter for this color.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// 4-bit background colors (SGR `40`-`47`, `49`, `100`-`107`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundColor {
    /// `40`
    Black = 40,
    /// `41`
    Red = 41,
    /// `42`
    Green = 42,
    /// `43`
    Yellow = 43,
    /// `44`
    Blue = 44,
    /// `45`
    Magenta = 45,
    /// `46`
    Cyan = 46,
    /// `47`
    White = 47,
    /// `49`, the terminal's own background.
    #[default]
    Default = 49,
    /// `100`
    Gray = 100,
    /// `101`
    BrightRed = 101,
    /// `102`
    BrightGreen = 102,
    /// `103`
    BrightYellow = 103,
    /// `104`
    BrightBlue = 104,
    /// `105`
    BrightMagenta = 105,
    /// `106`
    BrightCyan = 106,
    /// `107`
    BrightWhite = 107,
}

impl BackgroundColor {
    /// The SGR parameter for this color.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}
