use fxhash::FxHashSet;
use grid_snake::{grid::Grid, Cell, Direction, GameState, SnakeError, StepOutcome};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn play(game: &mut GameState, input: &mut SmallRng, steps: usize) {
    for _ in 0..steps {
        if let Some(d) = Direction::all().choose(input) {
            game.steer(*d);
        }
        match black_box(game.step()) {
            Ok(StepOutcome::Died) | Err(SnakeError::NoSpace) => {
                game.reset().unwrap();
            }
            Ok(_) => {}
            Err(e) => panic!("{}", e),
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();

    let mut g = c.benchmark_group("GameState");
    for size in [10u32, 40] {
        let config = grid_snake::config_fixture(&format!(
            "{{\"grid_size\": {}, \"start\": {{\"x\": 5, \"y\": 5}}}}",
            size
        ));
        g.bench_function(format!("step {}x{}", size, size), |b| {
            let mut game = GameState::seeded(config, 1).unwrap();
            let mut input = SmallRng::seed_from_u64(2);
            b.iter(|| play(&mut game, &mut input, 100));
        });
    }

    g.bench_function("random empty cell on a crowded grid", |b| {
        let grid = Grid::new(40);
        // everything but the last row is taken
        let occupied: FxHashSet<Cell> = grid.cells().filter(|c| c.y < 39).collect();
        let mut rng = SmallRng::seed_from_u64(3);
        b.iter(|| black_box(grid.random_empty_cell(&occupied, &mut rng)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
