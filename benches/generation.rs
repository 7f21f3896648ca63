// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for Tunesmith
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Full melody generation throughput
//! - Scale derivation and duration quantization
//! - Playback schedule placement and MIDI rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tunesmith::export::MidiExport;
use tunesmith::generate::MelodyGenerator;
use tunesmith::music::chord::Chord;
use tunesmith::music::theory::{quantize, Mode, PitchClass, Scale};
use tunesmith::playback::{PlaybackMode, Schedule};

fn bench_generate_melody(c: &mut Criterion) {
    let progression = vec![Chord::C, Chord::Am, Chord::F, Chord::G];

    c.bench_function("generate_melody", |b| {
        b.iter(|| {
            let mut generator =
                MelodyGenerator::with_seed(black_box(progression.clone()), black_box(42));
            black_box(generator.generate())
        })
    });
}

fn bench_scale_derivation(c: &mut Criterion) {
    c.bench_function("scale_of", |b| {
        b.iter(|| black_box(Scale::of(black_box(PitchClass::Fs), black_box(Mode::Minor))))
    });

    c.bench_function("chord_tones", |b| {
        b.iter(|| black_box(black_box(Chord::Bb).tones()))
    });
}

fn bench_quantize(c: &mut Criterion) {
    c.bench_function("quantize_duration", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..64 {
                acc += quantize(black_box(i as f64 * 0.037));
            }
            black_box(acc)
        })
    });
}

fn bench_schedule_and_export(c: &mut Criterion) {
    let progression = vec![Chord::C, Chord::Am, Chord::F, Chord::G];
    let melody = MelodyGenerator::with_seed(progression.clone(), 7).generate();

    c.bench_function("schedule_build", |b| {
        b.iter(|| {
            black_box(Schedule::build(
                black_box(&progression),
                black_box(&melody),
                PlaybackMode::Both,
            ))
        })
    });

    c.bench_function("midi_to_bytes", |b| {
        b.iter(|| black_box(MidiExport::new(&progression, &melody).to_bytes()))
    });
}

criterion_group!(
    benches,
    bench_generate_melody,
    bench_scale_derivation,
    bench_quantize,
    bench_schedule_and_export
);
criterion_main!(benches);
