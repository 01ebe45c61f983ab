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


//! Select Graphic Rendition (SGR) sequence builder.
//!
//! SGR sequences are CSI sequences terminated by `m`. They change how text
//! written after them is rendered: display attributes such as bold or
//! underline, and foreground/background colors.
//!
//! | Call                                         | Output                   |
//! |----------------------------------------------|--------------------------|
//! | `display_attribute(Bold)`                    | `ESC[1m`                 |
//! | `colors_reset()`                             | `ESC[39;49m`             |
//! | `named_color(Red, Default)`                  | `ESC[31;49m`             |
//! | `palette_color(200, Foreground, Colon)`      | `ESC[38:5:200m`          |
//! | `palette_color(200, Background, Semicolon)`  | `ESC[48;5;200m`          |
//! | `rgb_color((1,23,255), Foreground, Colon)`   | `ESC[38:2::1:23:255m`    |
//! | `rgb_color((1,23,255), Foreground, Semicolon)` | `ESC[38;2;1;23;255m`   |
//!
//! The colon form of a 24-bit color carries an empty color-space slot after
//! the mode (`:2::r:g:b`) as ITU T.416 describes it, while the semicolon form
//! used by most terminals does not (`;2;r;g;b`). Both are emitted verbatim.

use crate::consts::{
    SGR_BACKGROUND, SGR_DEFAULT_COLORS, SGR_FOREGROUND, SGR_MODE_PALETTE, SGR_MODE_RGB,
};
use crate::enclose::CsiFunction;
use crate::{
    BackgroundColor, Color, ColorPlane, EscapeCharacter, ForegroundColor, RgbColor,
    SequencerError, SequencerResult,
};
use std::str::FromStr;

/// Separator placed between the parameters of an extended color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// ITU T.416 sub-parameter form, `38:5:n` / `38:2::r:g:b`.
    #[default]
    Colon,
    /// Widely deployed xterm form, `38;5;n` / `38;2;r;g;b`.
    Semicolon,
}

impl Delimiter {
    /// The separator character.
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Colon => ':',
            Delimiter::Semicolon => ';',
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Colon => write!(f, "colon"),
            Delimiter::Semicolon => write!(f, "semicolon"),
        }
    }
}

impl FromStr for Delimiter {
    type Err = SequencerError;

    fn from_str(s: &str) -> SequencerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "colon" | "colons" | ":" => Ok(Delimiter::Colon),
            "semicolon" | "semicolons" | ";" => Ok(Delimiter::Semicolon),
            _ => Err(SequencerError::invalid_option("color_delimiter", s)),
        }
    }
}

/// Display attributes selectable with a single SGR parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisplayAttribute {
    /// All attributes off.
    Reset = 0,
    /// Bold or increased intensity.
    Bold = 1,
    /// Faint or decreased intensity.
    Faint = 2,
    /// Italic.
    Italic = 3,
    /// Single underline.
    Underline = 4,
    /// Slow blink.
    Blink = 5,
    /// Reverse video, swaps foreground and background.
    Invert = 7,
    /// Hidden text.
    Conceal = 8,
    /// Crossed-out text.
    Strikeout = 9,
    /// Double underline (some terminals treat it as "not bold").
    DoublyUnderlined = 21,
    /// Neither bold nor faint.
    NormalIntensity = 22,
    /// Neither singly nor doubly underlined.
    NotUnderlined = 24,
    /// Blinking off.
    NotBlinking = 25,
    /// Reverse video off.
    NotInverted = 27,
    /// Concealment off.
    Reveal = 28,
    /// Crossed-out off.
    NotStrikeout = 29,
    /// Overline.
    Overlined = 53,
    /// Overline off.
    NotOverlined = 55,
}

impl DisplayAttribute {
    /// The SGR parameter for this attribute.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Produces Select Graphic Rendition sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SgrSequencer {
    escape: EscapeCharacter,
}

impl SgrSequencer {
    /// Creates a builder that opens sequences with the given ESC rendering.
    pub fn new(escape: EscapeCharacter) -> Self {
        Self { escape }
    }

    /// The ESC rendering used by this builder.
    pub fn escape_character(&self) -> EscapeCharacter {
        self.escape
    }

    /// Sets a single display attribute, `ESC[ n m`.
    pub fn display_attribute(&self, attribute: DisplayAttribute) -> String {
        self.sgr(&attribute.code().to_string())
    }

    /// Resets foreground and background to the terminal defaults, `ESC[39;49m`.
    pub fn colors_reset(&self) -> String {
        self.sgr(SGR_DEFAULT_COLORS)
    }

    /// Sets a 4-bit foreground and background pair, `ESC[ fg;bg m`.
    pub fn named_color(&self, foreground: ForegroundColor, background: BackgroundColor) -> String {
        self.sgr(&format!("{};{}", foreground.code(), background.code()))
    }

    /// Sets an 8-bit palette color on one plane.
    ///
    /// `ESC[38:5:n m` with colons, `ESC[38;5;n m` with semicolons (`48` for
    /// the background).
    pub fn palette_color(&self, index: u8, plane: ColorPlane, delimiter: Delimiter) -> String {
        let sep = delimiter.as_char();
        self.sgr(&format!(
            "{}{sep}{}{sep}{}",
            Self::plane_code(plane),
            SGR_MODE_PALETTE,
            index
        ))
    }

    /// Sets a 24-bit color on one plane.
    ///
    /// `ESC[38:2::r:g:b m` with colons, `ESC[38;2;r;g;b m` with semicolons
    /// (`48` for the background).
    pub fn rgb_color(&self, color: RgbColor, plane: ColorPlane, delimiter: Delimiter) -> String {
        let code = Self::plane_code(plane);
        let (r, g, b) = (color.red(), color.green(), color.blue());
        let params = match delimiter {
            Delimiter::Colon => format!("{code}:{SGR_MODE_RGB}::{r}:{g}:{b}"),
            Delimiter::Semicolon => format!("{code};{SGR_MODE_RGB};{r};{g};{b}"),
        };
        self.sgr(&params)
    }

    /// Sets an extended color on one plane, dispatching on its kind.
    pub fn color(&self, color: Color, plane: ColorPlane, delimiter: Delimiter) -> String {
        match color {
            Color::Palette(index) => self.palette_color(index, plane, delimiter),
            Color::Rgb(rgb) => self.rgb_color(rgb, plane, delimiter),
        }
    }

    fn plane_code(plane: ColorPlane) -> &'static str {
        match plane {
            ColorPlane::Foreground => SGR_FOREGROUND,
            ColorPlane::Background => SGR_BACKGROUND,
        }
    }

    fn sgr(&self, params: &str) -> String {
        let mut out = self.escape.introducer();
        out.push_str(params);
        out.push(char::from(CsiFunction::SelectGraphicRendition.terminator()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorName;

    #[test]
    fn test_display_attribute() {
        let sgr = SgrSequencer::default();
        assert_eq!(sgr.display_attribute(DisplayAttribute::Reset), "\x1b[0m");
        assert_eq!(sgr.display_attribute(DisplayAttribute::Bold), "\x1b[1m");
        assert_eq!(sgr.display_attribute(DisplayAttribute::Invert), "\x1b[7m");
        assert_eq!(sgr.display_attribute(DisplayAttribute::NotOverlined), "\x1b[55m");
    }

    #[test]
    fn test_colors_reset() {
        assert_eq!(SgrSequencer::default().colors_reset(), "\x1b[39;49m");
    }

    #[test]
    fn test_named_color() {
        let sgr = SgrSequencer::default();
        assert_eq!(
            sgr.named_color(ForegroundColor::Red, BackgroundColor::Default),
            "\x1b[31;49m"
        );
        assert_eq!(
            sgr.named_color(ForegroundColor::BrightCyan, BackgroundColor::Gray),
            "\x1b[96;100m"
        );
    }

    #[test]
    fn test_palette_color() {
        let sgr = SgrSequencer::default();
        assert_eq!(
            sgr.palette_color(200, ColorPlane::Foreground, Delimiter::Colon),
            "\x1b[38:5:200m"
        );
        assert_eq!(
            sgr.palette_color(0, ColorPlane::Background, Delimiter::Semicolon),
            "\x1b[48;5;0m"
        );
    }

    #[test]
    fn test_rgb_color_colon_form_doubles_separator() {
        let sgr = SgrSequencer::default();
        let color = RgbColor::new(1, 23, 255);
        assert_eq!(
            sgr.rgb_color(color, ColorPlane::Foreground, Delimiter::Colon),
            "\x1b[38:2::1:23:255m"
        );
        assert_eq!(
            sgr.rgb_color(color, ColorPlane::Foreground, Delimiter::Semicolon),
            "\x1b[38;2;1;23;255m"
        );
    }

    #[test]
    fn test_rgb_background() {
        let sgr = SgrSequencer::default();
        let teal = RgbColor::named(ColorName::Teal);
        assert_eq!(
            sgr.rgb_color(teal, ColorPlane::Background, Delimiter::Semicolon),
            "\x1b[48;2;0;128;128m"
        );
    }

    #[test]
    fn test_color_dispatch() {
        let sgr = SgrSequencer::default();
        assert_eq!(
            sgr.color(Color::Palette(42), ColorPlane::Foreground, Delimiter::Semicolon),
            sgr.palette_color(42, ColorPlane::Foreground, Delimiter::Semicolon)
        );
        assert_eq!(
            sgr.color(ColorName::Teal.into(), ColorPlane::Background, Delimiter::Colon),
            "\x1b[48:2::0:128:128m"
        );
    }

    #[test]
    fn test_escaped_rendering() {
        let sgr = SgrSequencer::new(EscapeCharacter::Octal);
        assert_eq!(sgr.display_attribute(DisplayAttribute::Bold), "\\033[1m");
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
        assert_eq!("Colon".parse::<Delimiter>().unwrap(), Delimiter::Colon);
        assert!("comma".parse::<Delimiter>().is_err());
    }
}
