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


//! Byte-level constants shared by the sequence builders and the validator.

use std::ops::RangeInclusive;

/// The ESC control byte (0x1B) that opens every sequence.
pub const ESC: u8 = 0x1B;

/// The second byte of a Control Sequence Introducer (`ESC [`).
pub const CSI_BRACKET: u8 = b'[';

/// Printable bytes accepted between `ESC` and the end of a CSI sequence.
///
/// Anything outside of space (0x20) through tilde (0x7E) is rejected by the
/// validator before grammar matching.
pub const PRINTABLE_RANGE: RangeInclusive<u8> = 0x20..=0x7E;

/// SGR parameter selecting an extended foreground color.
pub const SGR_FOREGROUND: &str = "38";

/// SGR parameter selecting an extended background color.
pub const SGR_BACKGROUND: &str = "48";

/// Extended color mode for 8-bit palette colors (`38;5;n`).
pub const SGR_MODE_PALETTE: &str = "5";

/// Extended color mode for 24-bit colors (`38;2;r;g;b`).
pub const SGR_MODE_RGB: &str = "2";

/// SGR parameters resetting foreground and background to the terminal default.
pub const SGR_DEFAULT_COLORS: &str = "39;49";

/// ECMA-48 default for cursor and scroll counts. Builders take explicit counts,
/// so callers pass this for a single step.
pub const DEFAULT_COUNT: usize = 1;
