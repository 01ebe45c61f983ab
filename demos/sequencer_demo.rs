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


//! Control Sequence Demonstration
//!
//! Prints a short tour of the sequences the sequencer produces, both applied
//! to the terminal and in their printable `\033` form.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example sequencer_demo
//! RUST_LOG=trace cargo run --example sequencer_demo
//! ```

use bytes::BytesMut;
use std::io::Write;
use termseq_sequencer::{
    AnsiSequencer, BackgroundColor, ColorName, ColorPlane, CursorDirection, DEFAULT_COUNT,
    DisplayAttribute, EscapeCharacter, ForegroundColor, RgbColor, SequencerCodec,
    SequencerCommand, SequencerConfig, escape_sequence, is_valid,
};
use tokio_util::codec::Encoder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sequencer = AnsiSequencer::default();
    let samples = [
        ("bold", sequencer.set_display(DisplayAttribute::Bold)),
        (
            "named colors",
            sequencer.set_named_color(ForegroundColor::BrightYellow, BackgroundColor::Blue),
        ),
        ("palette 208", sequencer.set_color(208u8, ColorPlane::Foreground)),
        ("teal", sequencer.set_color(ColorName::Teal, ColorPlane::Background)),
        (
            "hex #FF7F00",
            sequencer.set_color(RgbColor::from_hex("#FF7F00")?, ColorPlane::Foreground),
        ),
    ];

    let mut stdout = std::io::stdout().lock();
    for (label, sequence) in &samples {
        writeln!(
            stdout,
            "{}{:<14}{} {:<28} valid CSI: {}",
            sequence,
            label,
            sequencer.reset_display(),
            escape_sequence(sequence, EscapeCharacter::Octal),
            is_valid(sequence)
        )?;
    }

    let mut codec = SequencerCodec::new(SequencerConfig::standard());
    let mut buffer = BytesMut::new();
    codec.encode(SequencerCommand::SaveCursor, &mut buffer)?;
    codec.encode(
        SequencerCommand::MoveCursor(CursorDirection::Forward, DEFAULT_COUNT * 40),
        &mut buffer,
    )?;
    codec.encode(SequencerCommand::SetDisplay(DisplayAttribute::Invert), &mut buffer)?;
    codec.encode(" moved right ", &mut buffer)?;
    codec.encode(SequencerCommand::ResetDisplay, &mut buffer)?;
    codec.encode(SequencerCommand::RestoreCursor, &mut buffer)?;
    codec.encode('\n', &mut buffer)?;
    stdout.write_all(&buffer)?;
    stdout.flush()?;

    Ok(())
}
