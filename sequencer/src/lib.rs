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


//! Generation and validation of ANSI/VT100 terminal control sequences.
//!
//! The crate is a pure, stateless string producer. Builders turn a control
//! function and its parameters into an escape sequence; the validator checks
//! an arbitrary string against the CSI grammar. Nothing here performs I/O:
//! sequences are handed to a console writer, either directly or through the
//! [`SequencerCodec`].
//!
//! - [`CsiSequencer`]: cursor movement, scrolling and erase (`ESC[`...)
//! - [`SgrSequencer`]: display attributes and colors (`ESC[`...`m`)
//! - [`FsSequencer`] / [`FpSequencer`]: terminal reset and DEC cursor memory
//!   (`ESC c`, `ESC 7`, `ESC 8`)
//! - [`is_valid`] / [`classify`]: CSI grammar check
//! - [`AnsiSequencer`]: purpose named facade driven by a [`SequencerConfig`]

mod codec;
mod color;
mod command;
mod config;
mod consts;
mod csi;
pub mod enclose;
mod escape;
mod fp;
mod fs;
mod result;
mod sequencer;
mod sgr;
mod validator;

pub use self::codec::SequencerCodec;
pub use self::color::{BackgroundColor, Color, ColorName, ColorPlane, ForegroundColor, RgbColor};
pub use self::command::SequencerCommand;
pub use self::config::{CursorAddressing, CursorMemory, SequencerConfig};
pub use self::consts::{DEFAULT_COUNT, ESC, PRINTABLE_RANGE};
pub use self::csi::{CsiSequencer, EraseInDisplayMode, EraseInLineMode};
pub use self::enclose::{CsiFunction, FpFunction, FsFunction, SequenceFamily, Terminator};
pub use self::escape::{EscapeCharacter, escape_sequence};
pub use self::fp::FpSequencer;
pub use self::fs::FsSequencer;
pub use self::result::{SequencerError, SequencerResult};
pub use self::sequencer::{AnsiSequencer, CursorDirection, ScrollDirection};
pub use self::sgr::{Delimiter, DisplayAttribute, SgrSequencer};
pub use self::validator::{CsiForm, classify, is_valid};
