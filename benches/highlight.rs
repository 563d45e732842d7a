//! Benchmarks for jump_hints highlight queries.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jump_hints::{Engine, LineSource, MotionEvent, MotionKind, Position, find, sneak};
use ropey::Rope;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Rope-based buffer for benchmarking
struct BenchBuffer {
    rope: Rope,
}

impl BenchBuffer {
    fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl LineSource for BenchBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line_len(&self, line: u32) -> u32 {
        self.line_text(line).graphemes(true).count() as u32
    }

    fn line_text(&self, line: u32) -> String {
        if line >= self.line_count() {
            return String::new();
        }
        self.rope
            .line(line as usize)
            .to_string()
            .trim_end_matches('\n')
            .to_string()
    }
}

fn generate_sample_line(words: usize) -> String {
    let vocabulary = [
        "let", "self", "cursor", "offset", "line", "text", "map", "iter", "the", "value",
    ];
    let mut line = String::from("    ");
    for i in 0..words {
        line.push_str(vocabulary[i % vocabulary.len()]);
        line.push_str(if i % 3 == 0 { "(" } else { " " });
    }
    line
}

fn benchmark_find(c: &mut Criterion) {
    let line = generate_sample_line(60);
    let cursor = line.chars().count() / 2;

    c.bench_function("find forward+backward (long line)", |b| {
        b.iter(|| {
            let f = find::highlight_forward(black_box(&line), black_box(cursor));
            let r = find::highlight_backward(black_box(&line), black_box(cursor));
            (f, r)
        });
    });
}

fn benchmark_sneak(c: &mut Criterion) {
    let line = generate_sample_line(60);
    let cursor = line.chars().count() / 2;

    c.bench_function("sneak forward+backward (long line)", |b| {
        b.iter(|| {
            let f = sneak::highlight_forward(black_box(&line), black_box(cursor));
            let r = sneak::highlight_backward(black_box(&line), black_box(cursor));
            (f, r)
        });
    });
}

fn benchmark_engine_cycle(c: &mut Criterion) {
    let text = (0..200)
        .map(|_| generate_sample_line(20))
        .collect::<Vec<_>>()
        .join("\n");
    let buffer = BenchBuffer::new(&text);
    let mut engine = Engine::new();
    let cursor = Position { line: 100, col: 40 };

    c.bench_function("engine start/end cycle", |b| {
        b.iter(|| {
            for kind in [MotionKind::FindForward, MotionKind::SneakBackward] {
                let _ = engine.handle_event(&buffer, cursor, black_box(MotionEvent::Start(kind)));
                let _ = engine.handle_event(&buffer, cursor, black_box(MotionEvent::End));
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_find,
              benchmark_sneak,
              benchmark_engine_cycle
}
criterion_main!(benches);
