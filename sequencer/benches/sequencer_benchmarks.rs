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


//! Benchmarks for sequence generation and validation

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use termseq_sequencer::{
    AnsiSequencer, ColorPlane, CsiSequencer, CursorDirection, Delimiter, RgbColor,
    SequencerCodec, SequencerCommand, SgrSequencer, is_valid,
};
use tokio_util::codec::Encoder;

// Benchmark CSI cursor sequence generation
fn bench_csi_generation(c: &mut Criterion) {
    let csi = CsiSequencer::default();
    let mut group = c.benchmark_group("csi_generation");

    group.bench_function("cursor_up", |b| {
        b.iter(|| black_box(csi.cursor_up(black_box(42))));
    });
    group.bench_function("cursor_position", |b| {
        b.iter(|| black_box(csi.cursor_position(black_box(11), black_box(23))));
    });
    group.finish();
}

// Benchmark SGR color generation in both delimiter forms
fn bench_sgr_generation(c: &mut Criterion) {
    let sgr = SgrSequencer::default();
    let color = RgbColor::new(1, 23, 255);
    let mut group = c.benchmark_group("sgr_generation");

    for delimiter in [Delimiter::Colon, Delimiter::Semicolon] {
        group.bench_with_input(
            BenchmarkId::new("rgb_color", delimiter),
            &delimiter,
            |b, &delimiter| {
                b.iter(|| black_box(sgr.rgb_color(color, ColorPlane::Foreground, delimiter)));
            },
        );
    }
    group.finish();
}

// Benchmark validation against sequences with growing parameter lists
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for params in [1, 2, 8, 32].iter() {
        let sequence = format!("\x1b[{}m", vec!["255"; *params].join(";"));
        group.throughput(Throughput::Bytes(sequence.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(params), &sequence, |b, seq| {
            b.iter(|| black_box(is_valid(black_box(seq))));
        });
    }

    group.bench_function("rejected_control_byte", |b| {
        b.iter(|| black_box(is_valid(black_box("\x1b[1;2\n3m"))));
    });
    group.finish();
}

// Benchmark encoding a batch of commands through the codec
fn bench_codec_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_encode");
    let commands: Vec<SequencerCommand> = (0..100)
        .map(|n| SequencerCommand::MoveCursor(CursorDirection::Forward, n))
        .collect();

    group.throughput(Throughput::Elements(commands.len() as u64));
    group.bench_function("move_cursor_x100", |b| {
        let mut codec = SequencerCodec::default();
        b.iter(|| {
            let mut buffer = BytesMut::new();
            for command in &commands {
                codec.encode(*command, &mut buffer).unwrap();
            }
            black_box(buffer);
        });
    });
    group.finish();

    let sequencer = AnsiSequencer::default();
    c.bench_function("facade_set_color", |b| {
        b.iter(|| black_box(sequencer.set_color(black_box(200u8), ColorPlane::Background)));
    });
}

criterion_group!(
    benches,
    bench_csi_generation,
    bench_sgr_generation,
    bench_validation,
    bench_codec_encode,
);
criterion_main!(benches);
