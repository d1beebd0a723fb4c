use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brickgame::core::{Field, GameCore, SnakeEngine, TetrisEngine};
use brickgame::types::{UserAction, CELL_BLOCK};

fn bench_tetris_tick(c: &mut Criterion) {
    let mut engine = TetrisEngine::new(12345);
    engine.reset();
    engine.begin();

    c.bench_function("tetris_tick", |b| {
        b.iter(|| {
            engine.tick();
            if engine.status().is_terminal() {
                engine.reset();
                engine.begin();
            }
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y, CELL_BLOCK);
                }
            }
            black_box(field.clear_full_rows())
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    let mut engine = SnakeEngine::new(12345);
    engine.begin();
    // Circle forever inside the field instead of hitting a wall.
    let turns = [
        UserAction::Down,
        UserAction::Left,
        UserAction::Up,
        UserAction::Right,
    ];
    let mut i = 0;

    c.bench_function("snake_tick", |b| {
        b.iter(|| {
            engine.handle_action(turns[i % 4], false);
            i += 1;
            engine.tick();
            if engine.status().is_terminal() {
                engine.reset();
                engine.begin();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = TetrisEngine::new(12345);
    engine.reset();
    engine.begin();
    let mut snap = brickgame::core::GameSnapshot::default();

    c.bench_function("write_snapshot", |b| {
        b.iter(|| {
            engine.write_snapshot(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tetris_tick,
    bench_clear_full_rows,
    bench_snake_tick,
    bench_snapshot
);
criterion_main!(benches);
