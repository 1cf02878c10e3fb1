use battleship_bot::{hunt, Cell, Engine, Grid};
use std::collections::HashSet;

/// Engine with fixed ship layouts that records every probe.
struct ScriptedEngine {
    size: usize,
    ships: Vec<Vec<Cell>>,
    hits: HashSet<Cell>,
    probes: Vec<Cell>,
}

impl ScriptedEngine {
    fn new(size: usize, ships: &[&[(usize, usize)]]) -> Self {
        let ships = ships
            .iter()
            .map(|s| s.iter().copied().map(Cell::from).collect())
            .collect();
        Self {
            size,
            ships,
            hits: HashSet::new(),
            probes: Vec::new(),
        }
    }
}

impl Engine for ScriptedEngine {
    fn board_size(&self) -> usize {
        self.size
    }

    fn probe(&mut self, cell: Cell) -> bool {
        self.probes.push(cell);
        let hit = self.ships.iter().any(|s| s.contains(&cell));
        if hit {
            self.hits.insert(cell);
        }
        hit
    }

    fn sunk_ship_count(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| s.iter().all(|c| self.hits.contains(c)))
            .count()
    }
}

/// Fire the primary shot the way a session does, then trace.
fn trace_from(engine: &mut ScriptedEngine, grid: &mut Grid, origin: Cell) -> Vec<Cell> {
    grid.remove(origin);
    assert!(engine.probe(origin));
    engine.probes.clear();
    hunt(origin, grid, engine)
}

fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

#[test]
fn test_upward_hit_locks_vertical() {
    let mut engine = ScriptedEngine::new(10, &[&[(3, 5), (4, 5), (5, 5)]]);
    let mut grid = Grid::new(10);
    let ship = trace_from(&mut engine, &mut grid, c(5, 5));

    assert_eq!(ship, vec![c(5, 5), c(4, 5), c(3, 5)]);
    assert_eq!(engine.probes, vec![c(4, 5), c(3, 5), c(2, 5), c(6, 5)]);
    assert!(!engine.probes.contains(&c(5, 6)));
    assert!(!engine.probes.contains(&c(5, 4)));
}

#[test]
fn test_rightward_hit_locks_horizontal() {
    let mut engine = ScriptedEngine::new(10, &[&[(5, 4), (5, 5), (5, 6)]]);
    let mut grid = Grid::new(10);
    let ship = trace_from(&mut engine, &mut grid, c(5, 5));

    assert_eq!(ship, vec![c(5, 5), c(5, 6), c(5, 4)]);
    assert_eq!(
        engine.probes,
        vec![c(4, 5), c(5, 6), c(5, 7), c(5, 4), c(5, 3)]
    );
    assert!(!engine.probes.contains(&c(6, 5)));
}

#[test]
fn test_downward_ship_still_probes_left() {
    // Only an upward hit locks vertical, so a ship found going down still
    // gets a probe to the left of the origin.
    let mut engine = ScriptedEngine::new(10, &[&[(2, 3), (3, 3), (4, 3)]]);
    let mut grid = Grid::new(10);
    let ship = trace_from(&mut engine, &mut grid, c(2, 3));

    assert_eq!(ship, vec![c(2, 3), c(3, 3), c(4, 3)]);
    assert_eq!(
        engine.probes,
        vec![c(1, 3), c(2, 4), c(3, 3), c(4, 3), c(5, 3), c(2, 2)]
    );
}

#[test]
fn test_sinking_does_not_stop_traversal() {
    let mut engine = ScriptedEngine::new(10, &[&[(5, 5), (5, 6)]]);
    let mut grid = Grid::new(10);
    let ship = trace_from(&mut engine, &mut grid, c(5, 5));

    assert_eq!(ship, vec![c(5, 5), c(5, 6)]);
    assert_eq!(engine.sunk_ship_count(), 1);
    // (5, 7) and (5, 4) are probed even though the ship sank on (5, 6).
    assert_eq!(engine.probes, vec![c(4, 5), c(5, 6), c(5, 7), c(5, 4)]);
}

#[test]
fn test_dead_cells_and_edges_stop_marches() {
    let mut engine = ScriptedEngine::new(10, &[&[(0, 0), (0, 1)], &[(3, 5), (4, 5), (5, 5)]]);
    let mut grid = Grid::new(10);

    let corner = trace_from(&mut engine, &mut grid, c(0, 0));
    assert_eq!(corner, vec![c(0, 0), c(0, 1)]);
    assert_eq!(engine.probes, vec![c(0, 1), c(0, 2)]);

    grid.remove(c(4, 5));
    let blocked = trace_from(&mut engine, &mut grid, c(5, 5));
    assert_eq!(blocked, vec![c(5, 5)]);
    assert!(!engine.probes.contains(&c(4, 5)));
    assert_eq!(engine.probes, vec![c(5, 6), c(6, 5), c(5, 4)]);
}

#[test]
fn test_probed_cells_leave_the_grid() {
    let mut engine = ScriptedEngine::new(10, &[&[(5, 4), (5, 5), (5, 6)]]);
    let mut grid = Grid::new(10);
    let ship = trace_from(&mut engine, &mut grid, c(5, 5));

    for cell in ship.iter().chain(engine.probes.iter()) {
        assert!(!grid.contains(*cell), "{} still live", cell);
    }
    assert_eq!(grid.len(), 100 - 1 - engine.probes.len());
}
