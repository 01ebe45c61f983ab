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


//! Property tests for the CSI validator

use proptest::prelude::*;
use termseq_sequencer::{CsiForm, CsiSequencer, classify, is_valid};

type CursorBuilder = fn(&CsiSequencer, usize) -> String;

fn cursor_builders() -> [(CursorBuilder, char); 7] {
    [
        (CsiSequencer::cursor_up, 'A'),
        (CsiSequencer::cursor_down, 'B'),
        (CsiSequencer::cursor_forward, 'C'),
        (CsiSequencer::cursor_back, 'D'),
        (CsiSequencer::cursor_next_line, 'E'),
        (CsiSequencer::cursor_previous_line, 'F'),
        (CsiSequencer::cursor_horizontal_absolute, 'G'),
    ]
}

proptest! {
    #[test]
    fn cursor_builders_render_and_validate(n in any::<usize>()) {
        let csi = CsiSequencer::default();
        for (build, terminator) in cursor_builders() {
            let sequence = build(&csi, n);
            prop_assert_eq!(&sequence, &format!("\x1b[{}{}", n, terminator));
            prop_assert!(is_valid(&sequence));
        }
    }

    #[test]
    fn positions_classify_as_two_parameters(row in any::<usize>(), column in any::<usize>()) {
        let csi = CsiSequencer::default();
        prop_assert_eq!(classify(&csi.cursor_position(row, column)), Some(CsiForm::TwoParameters));
        prop_assert_eq!(
            classify(&csi.horizontal_vertical_position(row, column)),
            Some(CsiForm::TwoParameters)
        );
    }

    #[test]
    fn validator_is_total(input in any::<String>()) {
        let _ = is_valid(&input);
    }

    #[test]
    fn control_byte_anywhere_rejects(
        params in "[0-9]{1,3}(;[0-9]{1,3}){0,3}",
        control in prop::sample::select(vec!['\r', '\n', '\x0c', '\t', '\0', '\x1b']),
        position in 0usize..8,
    ) {
        let mut body: Vec<char> = format!("[{}m", params).chars().collect();
        let at = position.min(body.len());
        body.insert(at, control);
        let sequence: String = std::iter::once('\x1b').chain(body).collect();
        prop_assert!(!is_valid(&sequence));
    }

    #[test]
    fn semicolon_lists_with_empty_slots_are_valid(
        head in "[0-9]{1,4}",
        middle in prop::collection::vec(("[0-9]{1,4}", 1usize..4), 1..6),
        letter in "[a-zA-Z]",
    ) {
        let mut sequence = format!("\x1b[{}", head);
        for (digits, semicolons) in middle {
            sequence.push_str(&";".repeat(semicolons));
            sequence.push_str(&digits);
        }
        sequence.push_str(&letter);
        prop_assert!(is_valid(&sequence));
    }

    #[test]
    fn trailing_semicolon_is_invalid(
        params in "[0-9]{1,3}(;[0-9]{1,3}){0,4}",
        letter in "[a-zA-Z]",
    ) {
        let sequence = format!("\x1b[{};{}", params, letter);
        prop_assert!(!is_valid(&sequence));
    }
}
