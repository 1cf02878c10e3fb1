use crate::core::{Cell, Grid};

/// Remove the orthogonal neighbours of every ship cell from `grid` and return
/// how many were still live. Diagonal neighbours are left alone.
pub fn prune_dead_zone(grid: &mut Grid, ship: &[Cell]) -> usize {
    let size = grid.size();
    ship.iter()
        .flat_map(|&cell| cell.neighbors(size))
        .filter(|&n| grid.remove(n))
        .count()
}
