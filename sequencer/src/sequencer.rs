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


//! Task oriented facade over the CSI, SGR, Fs and Fp builders.

use crate::{
    BackgroundColor, Color, ColorPlane, CsiSequencer, CursorAddressing, CursorMemory,
    DisplayAttribute, EraseInDisplayMode, EraseInLineMode, ForegroundColor, FpSequencer,
    FsSequencer, SequencerConfig, SgrSequencer,
};

/// Direction of a relative cursor move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    /// CUU
    Up,
    /// CUD
    Down,
    /// CUF
    Forward,
    /// CUB
    Backward,
    /// CNL, to the start of a following line.
    NextLine,
    /// CPL, to the start of a preceding line.
    PreviousLine,
    /// CHA, to an absolute column on the current line.
    Column,
}

/// Direction the page content moves when scrolling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// SU, content moves up and new lines appear at the bottom.
    Up,
    /// SD, content moves down and new lines appear at the top.
    Down,
}

/// Builds escape sequences by purpose rather than by control function.
///
/// The sequencer holds only its [`SequencerConfig`]. Each call reads the
/// configuration, delegates to the matching builder and returns a fresh
/// string; nothing is mutated while a sequence is built, so identical calls
/// with an identical configuration produce identical output.
///
/// # Examples
///
/// ```rust
/// use termseq_sequencer::{AnsiSequencer, ColorPlane, CursorDirection, RgbColor};
///
/// let sequencer = AnsiSequencer::default();
/// assert_eq!(sequencer.move_cursor(CursorDirection::Up, 3), "\x1b[3A");
/// assert_eq!(sequencer.move_cursor_to(11, 23), "\x1b[11;23H");
/// assert_eq!(
///     sequencer.set_color(RgbColor::new(1, 23, 255), ColorPlane::Foreground),
///     "\x1b[38:2::1:23:255m"
/// );
/// assert_eq!(sequencer.save_cursor(), "\x1b7");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnsiSequencer {
    config: SequencerConfig,
}

impl AnsiSequencer {
    /// Creates a sequencer with the given configuration.
    pub fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Replaces the configuration used by subsequent calls.
    pub fn set_config(&mut self, config: SequencerConfig) {
        self.config = config;
    }

    /// Moves the cursor `cells` in `direction`. For [`CursorDirection::Column`]
    /// `cells` is the absolute target column. Pass
    /// [`DEFAULT_COUNT`](crate::DEFAULT_COUNT) for a single step.
    pub fn move_cursor(&self, direction: CursorDirection, cells: usize) -> String {
        let csi = self.csi();
        match direction {
            CursorDirection::Up => csi.cursor_up(cells),
            CursorDirection::Down => csi.cursor_down(cells),
            CursorDirection::Forward => csi.cursor_forward(cells),
            CursorDirection::Backward => csi.cursor_back(cells),
            CursorDirection::NextLine => csi.cursor_next_line(cells),
            CursorDirection::PreviousLine => csi.cursor_previous_line(cells),
            CursorDirection::Column => csi.cursor_horizontal_absolute(cells),
        }
    }

    /// Moves the cursor to (`row`, `column`) using the configured addressing.
    pub fn move_cursor_to(&self, row: usize, column: usize) -> String {
        let csi = self.csi();
        match self.config.cursor_addressing {
            CursorAddressing::CursorPosition => csi.cursor_position(row, column),
            CursorAddressing::HorizontalVerticalPosition => {
                csi.horizontal_vertical_position(row, column)
            }
        }
    }

    /// Scrolls the page by `lines`, usually [`DEFAULT_COUNT`](crate::DEFAULT_COUNT).
    pub fn scroll_page(&self, direction: ScrollDirection, lines: usize) -> String {
        let csi = self.csi();
        match direction {
            ScrollDirection::Up => csi.scroll_up(lines),
            ScrollDirection::Down => csi.scroll_down(lines),
        }
    }

    /// Clears part of the screen.
    pub fn clear_screen(&self, mode: EraseInDisplayMode) -> String {
        self.csi().erase_in_display(mode)
    }

    /// Clears the entire screen, `ESC[2J`.
    pub fn clear(&self) -> String {
        self.clear_screen(EraseInDisplayMode::EntireScreen)
    }

    /// Clears part of the current line.
    pub fn erase_line(&self, mode: EraseInLineMode) -> String {
        self.csi().erase_in_line(mode)
    }

    /// Clears the entire current line, `ESC[2K`.
    pub fn clear_line(&self) -> String {
        self.erase_line(EraseInLineMode::EntireLine)
    }

    /// Saves the cursor using the configured family.
    pub fn save_cursor(&self) -> String {
        match self.config.cursor_memory {
            CursorMemory::Fe => self.csi().save_cursor_position(),
            CursorMemory::Fp => self.fp().save_cursor(),
        }
    }

    /// Restores the cursor using the configured family.
    pub fn restore_cursor(&self) -> String {
        match self.config.cursor_memory {
            CursorMemory::Fe => self.csi().restore_cursor_position(),
            CursorMemory::Fp => self.fp().restore_cursor(),
        }
    }

    /// Sets one display attribute.
    pub fn set_display(&self, attribute: DisplayAttribute) -> String {
        self.sgr().display_attribute(attribute)
    }

    /// Sets a 4-bit foreground and background pair.
    pub fn set_named_color(
        &self,
        foreground: ForegroundColor,
        background: BackgroundColor,
    ) -> String {
        self.sgr().named_color(foreground, background)
    }

    /// Sets an 8-bit or 24-bit color with the configured delimiter.
    pub fn set_color(&self, color: impl Into<Color>, plane: ColorPlane) -> String {
        self.sgr().color(color.into(), plane, self.config.color_delimiter)
    }

    /// Turns every display attribute off, `ESC[0m`.
    pub fn reset_display(&self) -> String {
        self.set_display(DisplayAttribute::Reset)
    }

    /// Restores the terminal's default colors, `ESC[39;49m`.
    pub fn reset_colors(&self) -> String {
        self.sgr().colors_reset()
    }

    /// Fully resets the terminal, `ESC c`.
    pub fn reset_terminal(&self) -> String {
        FsSequencer::new(self.config.escape_character).reset_to_initial_state()
    }

    fn csi(&self) -> CsiSequencer {
        CsiSequencer::new(self.config.escape_character)
    }

    fn sgr(&self) -> SgrSequencer {
        SgrSequencer::new(self.config.escape_character)
    }

    fn fp(&self) -> FpSequencer {
        FpSequencer::new(self.config.escape_character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorName, Delimiter, EscapeCharacter, RgbColor};

    #[test]
    fn test_move_cursor_directions() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.move_cursor(CursorDirection::Up, 3), "\x1b[3A");
        assert_eq!(seq.move_cursor(CursorDirection::Down, 5), "\x1b[5B");
        assert_eq!(seq.move_cursor(CursorDirection::Forward, 2), "\x1b[2C");
        assert_eq!(seq.move_cursor(CursorDirection::Backward, 7), "\x1b[7D");
        assert_eq!(seq.move_cursor(CursorDirection::NextLine, 5), "\x1b[5E");
        assert_eq!(seq.move_cursor(CursorDirection::PreviousLine, 55), "\x1b[55F");
        assert_eq!(seq.move_cursor(CursorDirection::Column, 8), "\x1b[8G");
    }

    #[test]
    fn test_move_cursor_to_follows_addressing() {
        let cup = AnsiSequencer::default();
        assert_eq!(cup.move_cursor_to(11, 23), "\x1b[11;23H");

        let hvp = AnsiSequencer::new(
            SequencerConfig::default()
                .with_cursor_addressing(CursorAddressing::HorizontalVerticalPosition),
        );
        assert_eq!(hvp.move_cursor_to(13, 32), "\x1b[13;32f");
    }

    #[test]
    fn test_default_count_steps_once() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.move_cursor(CursorDirection::Down, crate::DEFAULT_COUNT), "\x1b[1B");
        assert_eq!(seq.scroll_page(ScrollDirection::Down, crate::DEFAULT_COUNT), "\x1b[1T");
    }

    #[test]
    fn test_scroll_page() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.scroll_page(ScrollDirection::Up, 33), "\x1b[33S");
        assert_eq!(seq.scroll_page(ScrollDirection::Down, 44), "\x1b[44T");
    }

    #[test]
    fn test_clear() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.clear(), "\x1b[2J");
        assert_eq!(seq.clear_line(), "\x1b[2K");
        assert_eq!(seq.clear_screen(EraseInDisplayMode::ToBeginningOfScreen), "\x1b[1J");
        assert_eq!(seq.erase_line(EraseInLineMode::ToEndOfLine), "\x1b[0K");
    }

    #[test]
    fn test_cursor_memory_families() {
        let fp = AnsiSequencer::default();
        assert_eq!(fp.save_cursor(), "\x1b7");
        assert_eq!(fp.restore_cursor(), "\x1b8");

        let fe =
            AnsiSequencer::new(SequencerConfig::default().with_cursor_memory(CursorMemory::Fe));
        assert_eq!(fe.save_cursor(), "\x1b[s");
        assert_eq!(fe.restore_cursor(), "\x1b[u");
    }

    #[test]
    fn test_colors_follow_delimiter() {
        let colon = AnsiSequencer::default();
        assert_eq!(
            colon.set_color(RgbColor::new(1, 23, 255), ColorPlane::Foreground),
            "\x1b[38:2::1:23:255m"
        );
        assert_eq!(colon.set_color(200u8, ColorPlane::Background), "\x1b[48:5:200m");

        let semi = AnsiSequencer::new(
            SequencerConfig::default().with_color_delimiter(Delimiter::Semicolon),
        );
        assert_eq!(
            semi.set_color(ColorName::Teal, ColorPlane::Foreground),
            "\x1b[38;2;0;128;128m"
        );
    }

    #[test]
    fn test_resets() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.reset_display(), "\x1b[0m");
        assert_eq!(seq.reset_colors(), "\x1b[39;49m");
        assert_eq!(seq.reset_terminal(), "\x1bc");
    }

    #[test]
    fn test_set_display_and_named_color() {
        let seq = AnsiSequencer::default();
        assert_eq!(seq.set_display(DisplayAttribute::Underline), "\x1b[4m");
        assert_eq!(
            seq.set_named_color(ForegroundColor::Yellow, BackgroundColor::Blue),
            "\x1b[33;44m"
        );
    }

    #[test]
    fn test_set_config_changes_later_output() {
        let mut seq = AnsiSequencer::default();
        let before = seq.reset_terminal();
        seq.set_config(SequencerConfig::default().with_escape_character(EscapeCharacter::Octal));
        assert_eq!(before, "\x1bc");
        assert_eq!(seq.reset_terminal(), "\\033c");
    }
}
