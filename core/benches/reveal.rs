use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweep_core::*;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(30, 16, 99).unwrap();

    c.bench_function("generate 30x16/99", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(Board::from_seed(&config, seed).unwrap())
        })
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    // one corner mine leaves a single huge zero region
    let config = GameConfig::new(Coord::MAX, Coord::MAX, 1).unwrap();
    let board = Board::from_mine_coords(config.size(), &[(0, 0)]).unwrap();

    c.bench_function("flood fill 255x255", |b| {
        b.iter(|| {
            let mut game = Game::with_board(board.clone(), FlagPolicy::Cosmetic);
            black_box(game.reveal((Coord::MAX - 1, Coord::MAX - 1)).unwrap())
        })
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
