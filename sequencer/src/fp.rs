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


use crate::EscapeCharacter;
use crate::enclose::FpFunction;

/// Produces private-use control function (Fp) sequences, `ESC final`.
///
/// DECSC/DECRC save and restore more state than the CSI `s`/`u` pair: the
/// cursor position together with the character set shift state and the
/// current SGR attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FpSequencer {
    escape: EscapeCharacter,
}

impl FpSequencer {
    /// Creates a builder that opens sequences with the given ESC rendering.
    pub fn new(escape: EscapeCharacter) -> Self {
        Self { escape }
    }

    /// DECSC - saves the cursor position, shift state and attributes, `ESC 7`.
    pub fn save_cursor(&self) -> String {
        self.sequence(FpFunction::SaveCursor)
    }

    /// DECRC - restores the state saved by DECSC, `ESC 8`.
    ///
    /// Terminals reset the state to defaults when nothing was saved.
    pub fn restore_cursor(&self) -> String {
        self.sequence(FpFunction::RestoreCursor)
    }

    fn sequence(&self, function: FpFunction) -> String {
        let mut out = String::from(self.escape.as_str());
        out.push(char::from(function.terminator()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore_cursor() {
        let fp = FpSequencer::default();
        assert_eq!(fp.save_cursor(), "\x1b7");
        assert_eq!(fp.restore_cursor(), "\x1b8");
    }

    #[test]
    fn test_no_bracket() {
        let fp = FpSequencer::default();
        for seq in [fp.save_cursor(), fp.restore_cursor()] {
            assert_eq!(seq.len(), 2);
            assert!(!seq.contains('['));
        }
    }
}
