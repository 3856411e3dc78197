use lifegrid::Config;
use lifegrid::Grid;
use lifegrid::SimError;
use lifegrid::Simulation;
use lifegrid::State;
use lifegrid::engine::Strategy;

fn empty(config: Config) -> anyhow::Result<Simulation> {
    Ok(Simulation::new(config.with_random_start(false).with_seed(42))?)
}

fn both_strategies() -> [Config; 2] {
    [
        Config::default().with_strategy(Strategy::FullScan),
        Config::default().with_strategy(Strategy::DirtySet),
    ]
}

#[test]
fn clear_kills_everything_and_stops() -> anyhow::Result<()> {
    let mut sim = Simulation::new(Config::default().with_seed(1))?;
    assert!(sim.population() > 0);

    sim.start();
    assert!(sim.is_running());

    sim.clear();

    assert!(!sim.is_running());
    assert_eq!(sim.state(), &Grid::new(30, 30));
    assert_eq!(sim.previous(), Some(&Grid::new(30, 30)));
    assert_eq!(sim.generation(), 0);

    Ok(())
}

#[test]
fn block_is_a_still_life() -> anyhow::Result<()> {
    for config in both_strategies() {
        let mut sim = empty(config)?;
        sim.load_pattern("Block")?;
        let block = sim.state().clone();

        assert_eq!(block.population(), 4);
        assert!(sim.start());
        assert_eq!(sim.state(), &block);
        assert!(sim.advance());
        assert_eq!(sim.state(), &block);
    }

    Ok(())
}

#[test]
fn blinker_has_period_two() -> anyhow::Result<()> {
    for config in both_strategies() {
        let mut sim = empty(config)?;
        sim.load_pattern("Blinker")?;
        let horizontal = sim.state().clone();

        sim.start();
        assert_ne!(sim.state(), &horizontal);
        assert_eq!(sim.population(), 3);

        sim.advance();
        assert_eq!(sim.state(), &horizontal);
    }

    Ok(())
}

#[test]
fn glider_moves_diagonally() -> anyhow::Result<()> {
    for config in both_strategies() {
        let mut sim = empty(config)?;
        sim.load_pattern("Glider")?;

        let before: Vec<_> = sim.state().live_cells().collect();

        sim.start();
        for _ in 0..3 {
            sim.advance();
        }

        let after: Vec<_> = sim.state().live_cells().collect();
        let shifted: Vec<_> = before.iter().map(|&(r, c)| (r + 1, c + 1)).collect();

        assert_eq!(after, shifted);
        assert_eq!(sim.generation(), 4);
    }

    Ok(())
}

#[test]
fn births_and_deaths() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;

    // (5, 5) has exactly 3 live neighbors and is born, (0, 0) has one and dies
    for (r, c) in [(4, 4), (4, 5), (4, 6), (0, 0), (0, 1)] {
        sim.set_cell(r, c, true)?;
    }
    sim.step()?;

    assert_eq!(sim.get(5, 5)?, State::Alive);
    assert_eq!(sim.get(0, 0)?, State::Dead);
    assert_eq!(sim.get(0, 1)?, State::Dead);

    // (4, 5) survives with 2 neighbors
    assert_eq!(sim.get(4, 5)?, State::Alive);

    Ok(())
}

#[test]
fn overpopulation() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;

    // plus sign: the center has 4 neighbors
    for (r, c) in [(10, 10), (9, 10), (11, 10), (10, 9), (10, 11)] {
        sim.set_cell(r, c, true)?;
    }
    sim.step()?;

    assert_eq!(sim.get(10, 10)?, State::Dead);

    Ok(())
}

#[test]
fn toggle_only_while_stopped() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;
    sim.load_pattern("Block")?;

    sim.start();
    let running = sim.state().clone();

    assert_eq!(sim.toggle(0, 0), Err(SimError::Running));
    assert_eq!(sim.set_cell(0, 0, true), Err(SimError::Running));
    assert_eq!(sim.state(), &running);

    sim.stop();
    assert_eq!(sim.toggle(0, 0)?, State::Alive);

    let diff = running
        .live_cells()
        .chain(sim.state().live_cells())
        .filter(|&(r, c)| running.get(r, c) != sim.state().get(r, c))
        .count();
    assert_eq!(diff, 1);

    assert_eq!(sim.toggle(0, 0)?, State::Dead);
    assert_eq!(sim.state(), &running);

    Ok(())
}

#[test]
fn toggled_cells_evolve_with_dirty_tracking() -> anyhow::Result<()> {
    let mut sim = empty(Config::default().with_strategy(Strategy::DirtySet))?;

    for c in 3..6 {
        sim.toggle(7, c)?;
    }
    sim.step()?;

    let vertical: Vec<_> = sim.state().live_cells().collect();
    assert_eq!(vertical, vec![(6, 4), (7, 4), (8, 4)]);

    Ok(())
}

#[test]
fn out_of_range_cells() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;

    assert!(matches!(sim.get(30, 0), Err(SimError::InvalidCoordinate { .. })));
    assert!(matches!(sim.toggle(0, 30), Err(SimError::InvalidCoordinate { .. })));
    assert_eq!(sim.population(), 0);

    Ok(())
}

#[test]
fn randomize_is_a_fair_coin() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;

    let trials = 20;
    let mut alive = 0;
    for _ in 0..trials {
        sim.randomize()?;
        alive += sim.population();
    }

    let cells = trials * sim.rows() * sim.cols();
    let p = alive as f64 / cells as f64;
    assert!((0.47..0.53).contains(&p), "p = {p}");

    Ok(())
}

#[test]
fn randomize_only_while_stopped() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;
    sim.start();

    assert_eq!(sim.randomize(), Err(SimError::Running));
    assert_eq!(sim.load_pattern("Glider"), Err(SimError::Running));

    Ok(())
}

#[test]
fn seeded_randomize_is_reproducible() -> anyhow::Result<()> {
    let a = Simulation::new(Config::default().with_seed(9))?;
    let b = Simulation::new(Config::default().with_seed(9))?;

    assert_eq!(a.state(), b.state());

    Ok(())
}

#[test]
fn unknown_pattern() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;

    assert_eq!(
        sim.load_pattern("Spaceship"),
        Err(SimError::PatternNotFound {
            name: "Spaceship".to_string()
        })
    );

    Ok(())
}

#[test]
fn pattern_too_large_leaves_grid_alone() -> anyhow::Result<()> {
    // 8x8 grid
    let mut sim = empty(Config::default().with_cell_size(75))?;
    sim.load_pattern("Block")?;
    let block = sim.state().clone();

    let err = sim.load_pattern("Gosper Glider Gun").unwrap_err();
    assert!(matches!(err, SimError::PatternTooLarge { rows: 8, cols: 8, .. }));
    assert_eq!(sim.state(), &block);

    Ok(())
}

#[test]
fn unsupported_cell_size_is_ignored() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;
    sim.load_pattern("Glider")?;
    let glider = sim.state().clone();

    assert_eq!(sim.set_cell_size(7), Err(SimError::InvalidCellSize { size: 7 }));
    assert_eq!(sim.cell_size(), 20);
    assert_eq!(sim.state(), &glider);

    Ok(())
}

#[test]
fn resize_walks_accepted_sizes() -> anyhow::Result<()> {
    let mut sim = empty(Config::default().with_cell_size(10))?;
    sim.load_pattern("Glider")?;

    // already the smallest
    assert!(!sim.resize(-1));
    assert_eq!(sim.cell_size(), 10);
    assert_eq!(sim.population(), 5);

    assert!(sim.resize(1));
    assert_eq!(sim.cell_size(), 12);
    assert_eq!((sim.rows(), sim.cols()), (50, 50));
    assert_eq!(sim.population(), 0);

    sim.set_cell_size(75)?;
    assert!(!sim.resize(1));
    assert_eq!(sim.cell_size(), 75);

    Ok(())
}

#[test]
fn resize_stops_the_simulation() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;
    sim.start();

    assert!(sim.resize(1));
    assert!(!sim.is_running());

    Ok(())
}

#[test]
fn speed_is_stored_as_given() -> anyhow::Result<()> {
    let mut sim = empty(Config::default())?;
    assert_eq!(sim.speed(), 100);

    sim.set_speed(5000);
    assert_eq!(sim.speed(), 5000);

    Ok(())
}

#[test]
fn strategies_agree_after_randomize_and_switching() -> anyhow::Result<()> {
    for seed in 0..20u64 {
        let config = Config::default().with_seed(seed).with_random_start(false);
        let mut full = Simulation::new(config.clone().with_strategy(Strategy::FullScan))?;
        let mut dirty = Simulation::new(config.with_strategy(Strategy::DirtySet))?;

        full.randomize()?;
        dirty.randomize()?;
        assert_eq!(full.state(), dirty.state());

        let (row, col) = (seed as usize % 30, (seed as usize * 7) % 30);
        for sim in [&mut full, &mut dirty] {
            sim.toggle(row, col)?;
            sim.set_cell(29 - row, col, false)?;
            sim.start();
        }
        assert_eq!(full.state(), dirty.state());

        for step in 0..50 {
            if step == 20 {
                full.set_strategy(Strategy::DirtySet);
                dirty.set_strategy(Strategy::FullScan);
            }
            if step == 30 {
                full.set_strategy(Strategy::FullScan);
                dirty.set_strategy(Strategy::DirtySet);
            }

            assert!(full.advance());
            assert!(dirty.advance());
            assert_eq!(full.state(), dirty.state(), "seed {seed}, step {step}");
        }

        assert_eq!(full.strategy(), Strategy::FullScan);
        assert_eq!(dirty.strategy(), Strategy::DirtySet);
    }

    Ok(())
}
