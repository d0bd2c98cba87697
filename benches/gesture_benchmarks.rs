//! Benchmarks for gesture window throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use head_gesture::{
    frame_ingest::FrameIngest,
    gesture_window::{classify, GestureState, GestureWindow, TieBreak},
    landmarks::Landmark,
};

fn benchmark_on_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_window");

    // Simulated 30 fps stream with a slow nodding motion
    let frames: Vec<(Vec<Landmark>, i64)> = (0..300)
        .map(|i| {
            let t = i as f32 / 30.0;
            let dy = 0.02 * (t * std::f32::consts::PI).sin() + 0.001 * rand::random::<f32>();
            (vec![Landmark::new(0.5, 0.5 + dy, 0.0); 478], i64::from(i) * 33)
        })
        .collect();

    group.bench_function("stream_300_frames", |b| {
        b.iter(|| {
            let ingest = FrameIngest::default();
            let mut window = GestureWindow::default();
            for (frame, t) in &frames {
                ingest.ingest(&mut window, black_box(frame), *t);
            }
            black_box(window.current_state())
        });
    });

    for len in [10usize, 47, 478] {
        let frame = vec![Landmark::default(); len];
        group.bench_with_input(BenchmarkId::new("single_frame", len), &frame, |b, frame| {
            let ingest = FrameIngest::default();
            let mut window = GestureWindow::default();
            let mut t = 0;
            b.iter(|| {
                t += 33;
                ingest.ingest(&mut window, black_box(frame), t)
            });
        });
    }

    group.finish();
}

fn benchmark_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            classify(
                black_box(0.03),
                black_box(0.02),
                0.01,
                TieBreak::None,
                GestureState::None,
            )
        });
    });
}

criterion_group!(benches, benchmark_on_frame, benchmark_classify);
criterion_main!(benches);
