use battleship_bot::{
    build_candidates, Cell, Grid, Phase, PhaseScheduler, PhaseSpec, StrategyError, Target, PHASES,
};
use rand::{rngs::SmallRng, SeedableRng};

fn total_candidates(size: usize) -> usize {
    PHASES
        .iter()
        .map(|spec| build_candidates(size, spec).unwrap().len())
        .sum()
}

#[test]
fn test_coarse_phase_follows_sequence() {
    let mut rng = SmallRng::seed_from_u64(1);
    let grid = Grid::new(10);
    let mut scheduler = PhaseScheduler::new(10, &PHASES).unwrap();
    let expected = scheduler.sequence(Phase::Coarse).to_vec();

    for (i, &cell) in expected.iter().enumerate() {
        assert_eq!(scheduler.phase(), Phase::Coarse);
        assert_eq!(scheduler.cursor(Phase::Coarse), i);
        let target = scheduler.next_target(&grid, &mut rng).unwrap();
        assert_eq!(target, Target::Probe { phase: Phase::Coarse, cell });
    }
    assert_eq!(scheduler.phase(), Phase::Medium);
}

#[test]
fn test_dead_candidate_is_skipped_but_consumed() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(10);
    grid.remove(Cell::new(4, 4));
    let mut scheduler = PhaseScheduler::new(10, &PHASES).unwrap();

    let target = scheduler.next_target(&grid, &mut rng).unwrap();
    assert_eq!(
        target,
        Target::Skip {
            phase: Phase::Coarse,
            cell: Cell::new(4, 4)
        }
    );
    assert_eq!(scheduler.cursor(Phase::Coarse), 1);
    let target = scheduler.next_target(&grid, &mut rng).unwrap();
    assert_eq!(
        target,
        Target::Probe {
            phase: Phase::Coarse,
            cell: Cell::new(5, 3)
        }
    );
}

#[test]
fn test_medium_phase_requires_live_neighbor() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(10);
    let mut scheduler = PhaseScheduler::new(10, &PHASES).unwrap();
    for _ in 0..scheduler.sequence(Phase::Coarse).len() {
        scheduler.next_target(&grid, &mut rng).unwrap();
    }
    assert_eq!(scheduler.phase(), Phase::Medium);

    // First medium candidate is (4, 4): live, but boxed in.
    let first = Cell::new(4, 4);
    assert_eq!(scheduler.sequence(Phase::Medium)[0], first);
    for n in first.neighbors(10).collect::<Vec<_>>() {
        grid.remove(n);
    }
    let target = scheduler.next_target(&grid, &mut rng).unwrap();
    assert_eq!(
        target,
        Target::Skip {
            phase: Phase::Medium,
            cell: first
        }
    );
    assert_eq!(scheduler.cursor(Phase::Medium), 1);
}

#[test]
fn test_fallback_after_all_phases() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut grid = Grid::new(10);
    let mut scheduler = PhaseScheduler::new(10, &PHASES).unwrap();
    for _ in 0..total_candidates(10) {
        assert!(!scheduler.is_exhausted());
        scheduler.next_target(&grid, &mut rng).unwrap();
    }
    assert!(scheduler.is_exhausted());
    assert_eq!(scheduler.phase(), Phase::Fallback);
    for phase in [Phase::Coarse, Phase::Medium, Phase::Fine] {
        assert_eq!(scheduler.cursor(phase), scheduler.sequence(phase).len());
    }

    // Fallback draws only live cells and never repeats once they are removed.
    let mut seen = Vec::new();
    while !grid.is_empty() {
        match scheduler.next_target(&grid, &mut rng).unwrap() {
            Target::Probe {
                phase: Phase::Fallback,
                cell,
            } => {
                assert!(grid.remove(cell));
                assert!(!seen.contains(&cell));
                seen.push(cell);
            }
            other => panic!("unexpected target {:?}", other),
        }
    }
    assert_eq!(seen.len(), 100);
    assert_eq!(
        scheduler.next_target(&grid, &mut rng),
        Err(StrategyError::GridExhausted)
    );
}

#[test]
fn test_empty_board_goes_straight_to_fallback() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut scheduler = PhaseScheduler::new(0, &PHASES).unwrap();
    assert_eq!(scheduler.phase(), Phase::Fallback);
    assert_eq!(
        scheduler.next_target(&Grid::new(0), &mut rng),
        Err(StrategyError::GridExhausted)
    );
}

#[test]
fn test_invalid_spacing() {
    let mut phases = PHASES;
    phases[2] = PhaseSpec::new(0, 0, 0, 0, 6);
    assert_eq!(
        PhaseScheduler::new(10, &phases).unwrap_err(),
        StrategyError::InvalidSpacing
    );
}
