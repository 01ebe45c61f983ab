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


use crate::{AnsiSequencer, SequencerCommand, SequencerConfig, SequencerError, SequencerResult};
use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::{instrument, trace};

/// Encoder that writes text and rendered [`SequencerCommand`]s into a byte
/// buffer for a terminal attached writer.
///
/// The codec only produces bytes. Pair it with `tokio_util::codec::FramedWrite`
/// or drain the buffer by hand to deliver the output.
///
/// # Examples
///
/// ```rust
/// use bytes::BytesMut;
/// use termseq_sequencer::{SequencerCodec, SequencerCommand, DisplayAttribute};
/// use tokio_util::codec::Encoder;
///
/// let mut codec = SequencerCodec::default();
/// let mut buffer = BytesMut::new();
/// codec.encode(SequencerCommand::SetDisplay(DisplayAttribute::Bold), &mut buffer).unwrap();
/// codec.encode("Hello", &mut buffer).unwrap();
/// codec.encode(SequencerCommand::ResetDisplay, &mut buffer).unwrap();
/// assert_eq!(&buffer[..], b"\x1b[1mHello\x1b[0m");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SequencerCodec {
    sequencer: AnsiSequencer,
}

impl SequencerCodec {
    /// Creates a codec rendering commands with the given configuration.
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            sequencer: AnsiSequencer::new(config),
        }
    }

    /// Get a reference to the sequencer used to render commands
    pub fn sequencer(&self) -> &AnsiSequencer {
        &self.sequencer
    }

    /// Get a mutable reference to the sequencer used to render commands
    pub fn sequencer_mut(&mut self) -> &mut AnsiSequencer {
        &mut self.sequencer
    }
}

impl Encoder<SequencerCommand> for SequencerCodec {
    type Error = SequencerError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: SequencerCommand, dst: &mut BytesMut) -> SequencerResult<()> {
        let sequence = item.render(&self.sequencer);
        trace!(command = ?item, length = sequence.len(), "encoding command");
        dst.put_slice(sequence.as_bytes());
        Ok(())
    }
}

impl Encoder<&str> for SequencerCodec {
    type Error = SequencerError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> SequencerResult<()> {
        dst.put_slice(item.as_bytes());
        Ok(())
    }
}

impl Encoder<String> for SequencerCodec {
    type Error = SequencerError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: String, dst: &mut BytesMut) -> SequencerResult<()> {
        dst.put_slice(item.as_bytes());
        Ok(())
    }
}

impl Encoder<char> for SequencerCodec {
    type Error = SequencerError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: char, dst: &mut BytesMut) -> SequencerResult<()> {
        let mut utf8 = [0u8; 4];
        dst.put_slice(item.encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }
}
