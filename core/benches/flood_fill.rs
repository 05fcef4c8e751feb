use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minesweep_core::{Board, Difficulty, GameConfig};
use std::hint::black_box;

fn bench_open_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill_open_board");
    for size in [32u8, 128, 255] {
        let config = GameConfig::new(size, size, 1).expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            b.iter(|| {
                let mut board = Board::new(config, 7);
                black_box(board.reveal((size / 2, size / 2)).expect("first reveal"))
            })
        });
    }
    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal_presets");
    for difficulty in [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ] {
        let config = difficulty.config();
        let (rows, cols) = config.size();
        group.bench_function(format!("{difficulty:?}"), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut board = Board::new(config, seed);
                black_box(board.reveal((rows / 2, cols / 2)).expect("first reveal"))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_open_board, bench_presets);
criterion_main!(benches);
