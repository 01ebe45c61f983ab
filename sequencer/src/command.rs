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


use crate::{
    AnsiSequencer, BackgroundColor, Color, ColorPlane, CursorDirection, DisplayAttribute,
    EraseInDisplayMode, EraseInLineMode, ForegroundColor, ScrollDirection,
};

/// A single facade operation captured as a value.
///
/// Commands let a caller queue terminal output ahead of time and hand it to
/// the [`SequencerCodec`](crate::SequencerCodec), which renders each command
/// with its sequencer when encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequencerCommand {
    /// See [`AnsiSequencer::move_cursor`]
    MoveCursor(CursorDirection, usize),
    /// See [`AnsiSequencer::move_cursor_to`]
    MoveCursorTo {
        /// Target row, 1-based
        row: usize,
        /// Target column, 1-based
        column: usize,
    },
    /// See [`AnsiSequencer::scroll_page`]
    ScrollPage(ScrollDirection, usize),
    /// See [`AnsiSequencer::clear_screen`]
    ClearScreen(EraseInDisplayMode),
    /// See [`AnsiSequencer::erase_line`]
    EraseLine(EraseInLineMode),
    /// See [`AnsiSequencer::save_cursor`]
    SaveCursor,
    /// See [`AnsiSequencer::restore_cursor`]
    RestoreCursor,
    /// See [`AnsiSequencer::set_display`]
    SetDisplay(DisplayAttribute),
    /// See [`AnsiSequencer::set_named_color`]
    SetNamedColor(ForegroundColor, BackgroundColor),
    /// See [`AnsiSequencer::set_color`]
    SetColor(Color, ColorPlane),
    /// See [`AnsiSequencer::reset_display`]
    ResetDisplay,
    /// See [`AnsiSequencer::reset_colors`]
    ResetColors,
    /// See [`AnsiSequencer::reset_terminal`]
    ResetTerminal,
}

impl SequencerCommand {
    /// Produces the escape sequence for this command.
    pub fn render(&self, sequencer: &AnsiSequencer) -> String {
        match *self {
            SequencerCommand::MoveCursor(direction, cells) => {
                sequencer.move_cursor(direction, cells)
            }
            SequencerCommand::MoveCursorTo { row, column } => sequencer.move_cursor_to(row, column),
            SequencerCommand::ScrollPage(direction, lines) => {
                sequencer.scroll_page(direction, lines)
            }
            SequencerCommand::ClearScreen(mode) => sequencer.clear_screen(mode),
            SequencerCommand::EraseLine(mode) => sequencer.erase_line(mode),
            SequencerCommand::SaveCursor => sequencer.save_cursor(),
            SequencerCommand::RestoreCursor => sequencer.restore_cursor(),
            SequencerCommand::SetDisplay(attribute) => sequencer.set_display(attribute),
            SequencerCommand::SetNamedColor(fg, bg) => sequencer.set_named_color(fg, bg),
            SequencerCommand::SetColor(color, plane) => sequencer.set_color(color, plane),
            SequencerCommand::ResetDisplay => sequencer.reset_display(),
            SequencerCommand::ResetColors => sequencer.reset_colors(),
            SequencerCommand::ResetTerminal => sequencer.reset_terminal(),
        }
    }
}
