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


//! Control Sequence Introducer (CSI) builder for cursor, scroll and erase
//! functions.
//!
//! Every sequence has the shape `ESC [ <params> <final>` where `<params>` is
//! zero, one or two decimal numbers separated by `;` and `<final>` is the
//! function's terminator from the [`CsiFunction`] table. Counts are taken as
//! given: zero and very large values are rendered literally and never
//! clamped.
//!
//! There are no implicit counts. Pass [`DEFAULT_COUNT`](crate::DEFAULT_COUNT)
//! (1) for the ECMA-48 default move of one cell, line or row;
//! `cursor_position(DEFAULT_COUNT, DEFAULT_COUNT)` is the home position.

use crate::EscapeCharacter;
use crate::enclose::CsiFunction;

/// ED - Erase in Display mode parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EraseInDisplayMode {
    /// `ESC[0J` - clear from the cursor to the end of the screen.
    #[default]
    ToEndOfScreen = 0,
    /// `ESC[1J` - clear from the cursor to the beginning of the screen.
    ToBeginningOfScreen = 1,
    /// `ESC[2J` - clear the entire screen.
    EntireScreen = 2,
    /// `ESC[3J` - clear the entire screen and the scrollback buffer.
    EntireScreenWithScrollback = 3,
}

/// EL - Erase in Line mode parameter. The cursor does not move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EraseInLineMode {
    /// `ESC[0K` - clear from the cursor to the end of the line.
    #[default]
    ToEndOfLine = 0,
    /// `ESC[1K` - clear from the cursor to the beginning of the line.
    ToBeginningOfLine = 1,
    /// `ESC[2K` - clear the entire line.
    EntireLine = 2,
}

/// Produces CSI sequences other than SGR.
///
/// # Examples
///
/// ```rust
/// use termseq_sequencer::CsiSequencer;
///
/// let csi = CsiSequencer::default();
/// assert_eq!(csi.cursor_up(3), "\x1b[3A");
/// assert_eq!(csi.cursor_position(11, 23), "\x1b[11;23H");
/// assert_eq!(csi.save_cursor_position(), "\x1b[s");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CsiSequencer {
    escape: EscapeCharacter,
}

impl CsiSequencer {
    /// Creates a builder that opens sequences with the given ESC rendering.
    pub fn new(escape: EscapeCharacter) -> Self {
        Self { escape }
    }

    /// The ESC rendering used by this builder.
    pub fn escape_character(&self) -> EscapeCharacter {
        self.escape
    }

    /// CUU - moves the cursor `cells` upward, `ESC[nA`.
    pub fn cursor_up(&self, cells: usize) -> String {
        self.one(cells, CsiFunction::CursorUp)
    }

    /// CUD - moves the cursor `cells` downward, `ESC[nB`.
    pub fn cursor_down(&self, cells: usize) -> String {
        self.one(cells, CsiFunction::CursorDown)
    }

    /// CUF - moves the cursor `cells` forward, `ESC[nC`.
    pub fn cursor_forward(&self, cells: usize) -> String {
        self.one(cells, CsiFunction::CursorForward)
    }

    /// CUB - moves the cursor `cells` backward, `ESC[nD`.
    pub fn cursor_back(&self, cells: usize) -> String {
        self.one(cells, CsiFunction::CursorBack)
    }

    /// CNL - moves the cursor to the start of the line `lines` down, `ESC[nE`.
    pub fn cursor_next_line(&self, lines: usize) -> String {
        self.one(lines, CsiFunction::CursorNextLine)
    }

    /// CPL - moves the cursor to the start of the line `lines` up, `ESC[nF`.
    pub fn cursor_previous_line(&self, lines: usize) -> String {
        self.one(lines, CsiFunction::CursorPreviousLine)
    }

    /// CHA - moves the cursor to `column`, `ESC[nG`.
    pub fn cursor_horizontal_absolute(&self, column: usize) -> String {
        self.one(column, CsiFunction::CursorHorizontalAbsolute)
    }

    /// CUP - moves the cursor to (`row`, `column`), `ESC[n;mH`.
    pub fn cursor_position(&self, row: usize, column: usize) -> String {
        self.two(row, column, CsiFunction::CursorPosition)
    }

    /// HVP - moves the cursor to (`row`, `column`), `ESC[n;mf`.
    ///
    /// Same effect as CUP, but classed by ECMA-48 as a format effector.
    pub fn horizontal_vertical_position(&self, row: usize, column: usize) -> String {
        self.two(row, column, CsiFunction::HorizontalVerticalPosition)
    }

    /// SU - scrolls the page up by `lines`, `ESC[nS`.
    pub fn scroll_up(&self, lines: usize) -> String {
        self.one(lines, CsiFunction::ScrollUp)
    }

    /// SD - scrolls the page down by `lines`, `ESC[nT`.
    pub fn scroll_down(&self, lines: usize) -> String {
        self.one(lines, CsiFunction::ScrollDown)
    }

    /// ED - clears part of the screen, `ESC[nJ`.
    pub fn erase_in_display(&self, mode: EraseInDisplayMode) -> String {
        self.one(mode as usize, CsiFunction::EraseInDisplay)
    }

    /// EL - clears part of the current line, `ESC[nK`.
    pub fn erase_in_line(&self, mode: EraseInLineMode) -> String {
        self.one(mode as usize, CsiFunction::EraseInLine)
    }

    /// SCP - saves the cursor position (SCO console mode), `ESC[s`.
    pub fn save_cursor_position(&self) -> String {
        self.none(CsiFunction::SaveCursorPosition)
    }

    /// RCP - restores the saved cursor position (SCO console mode), `ESC[u`.
    pub fn restore_cursor_position(&self) -> String {
        self.none(CsiFunction::RestoreCursorPosition)
    }

    fn none(&self, function: CsiFunction) -> String {
        let mut out = self.escape.introducer();
        out.push(char::from(function.terminator()));
        out
    }

    fn one(&self, n: usize, function: CsiFunction) -> String {
        format!(
            "{}{}{}",
            self.escape.introducer(),
            n,
            char::from(function.terminator())
        )
    }

    fn two(&self, n: usize, m: usize, function: CsiFunction) -> String {
        format!(
            "{}{};{}{}",
            self.escape.introducer(),
            n,
            m,
            char::from(function.terminator())
        )
    }
}
