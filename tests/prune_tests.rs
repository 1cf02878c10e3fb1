use battleship_bot::{prune_dead_zone, Cell, Grid};

fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

#[test]
fn test_prunes_orthogonal_neighbors_only() {
    let mut grid = Grid::new(10);
    let ship = [c(2, 2), c(2, 3)];
    for &s in &ship {
        grid.remove(s);
    }

    let pruned = prune_dead_zone(&mut grid, &ship);
    assert_eq!(pruned, 6);
    for gone in [c(1, 2), c(3, 2), c(2, 1), c(1, 3), c(3, 3), c(2, 4)] {
        assert!(!grid.contains(gone), "{} should be pruned", gone);
    }
    for kept in [c(1, 1), c(3, 4), c(1, 4), c(3, 1)] {
        assert!(grid.contains(kept), "{} should survive", kept);
    }
    assert_eq!(grid.len(), 100 - 2 - 6);
}

#[test]
fn test_prune_is_idempotent() {
    let mut grid = Grid::new(10);
    let ship = [c(0, 0), c(1, 0)];
    grid.remove(c(0, 0));
    grid.remove(c(1, 0));

    assert_eq!(prune_dead_zone(&mut grid, &ship), 3);
    assert_eq!(prune_dead_zone(&mut grid, &ship), 0);
    assert_eq!(grid.len(), 95);
}
