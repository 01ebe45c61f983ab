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
use crate::enclose::FsFunction;

/// Produces independent control function (Fs) sequences, `ESC final`.
///
/// Fs sequences carry no `[` and no parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FsSequencer {
    escape: EscapeCharacter,
}

impl FsSequencer {
    /// Creates a builder that opens sequences with the given ESC rendering.
    pub fn new(escape: EscapeCharacter) -> Self {
        Self { escape }
    }

    /// RIS - triggers a full reset of the terminal to its initial state, `ESC c`.
    pub fn reset_to_initial_state(&self) -> String {
        self.sequence(FsFunction::ResetToInitialState)
    }

    fn sequence(&self, function: FsFunction) -> String {
        let mut out = String::from(self.escape.as_str());
        out.push(char::from(function.terminator()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_to_initial_state() {
        let fs = FsSequencer::default();
        assert_eq!(fs.reset_to_initial_state(), "\x1bc");
        assert_eq!(fs.reset_to_initial_state().len(), 2);
    }

    #[test]
    fn test_octal_rendering() {
        let fs = FsSequencer::new(EscapeCharacter::Octal);
        assert_eq!(fs.reset_to_initial_state(), "\\033c");
    }
}
