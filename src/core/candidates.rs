//! Candidate sequences for the scan phases.
//!
//! A phase walks square rings of growing Chebyshev radius around a point near
//! the board centre and keeps only cells on the parity lattice
//! `(row + col) % spacing == 0`. The emission order is the probe order, so it
//! is part of the contract.

use alloc::vec::Vec;

use super::cell::Cell;
use super::common::StrategyError;

/// Parameters of one scan phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    /// Row offset of the ring centre from `size / 2`.
    pub center_row_offset: isize,
    /// Column offset of the ring centre from `size / 2`.
    pub center_col_offset: isize,
    /// Parity spacing; must be non-zero.
    pub spacing: usize,
    /// First ring radius, inclusive.
    pub layer_min: usize,
    /// Last ring radius, inclusive.
    pub layer_max: usize,
}

impl PhaseSpec {
    pub const fn new(
        center_row_offset: isize,
        center_col_offset: isize,
        spacing: usize,
        layer_min: usize,
        layer_max: usize,
    ) -> Self {
        Self {
            center_row_offset,
            center_col_offset,
            spacing,
            layer_min,
            layer_max,
        }
    }
}

/// Build the ordered candidate sequence of `spec` on a `size`×`size` board.
///
/// For each ring the horizontal edges are walked first (top then bottom cell
/// per row index), then the vertical edges without their corners (left then
/// right). Off-board cells are dropped silently.
pub fn build_candidates(size: usize, spec: &PhaseSpec) -> Result<Vec<Cell>, StrategyError> {
    if spec.spacing == 0 {
        return Err(StrategyError::InvalidSpacing);
    }
    let n = size as isize;
    let spacing = spec.spacing as isize;
    let center_x = n / 2 + spec.center_row_offset;
    let center_y = n / 2 + spec.center_col_offset;
    let on_board = |v: isize| (0..n).contains(&v);
    let on_lattice = |x: isize, y: isize| (x + y) % spacing == 0;

    let mut out = Vec::new();
    let mut emit = |x: isize, y: isize| out.push(Cell::new(x as usize, y as usize));

    for layer in spec.layer_min..=spec.layer_max {
        let layer = layer as isize;

        let (top_y, bottom_y) = (center_y - layer, center_y + layer);
        for x in (center_x - layer)..=(center_x + layer) {
            if !on_board(x) {
                continue;
            }
            if on_board(top_y) && on_lattice(x, top_y) {
                emit(x, top_y);
            }
            if on_board(bottom_y) && bottom_y != top_y && on_lattice(x, bottom_y) {
                emit(x, bottom_y);
            }
        }

        let (left_x, right_x) = (center_x - layer, center_x + layer);
        for y in (center_y - layer + 1)..(center_y + layer) {
            if !on_board(y) {
                continue;
            }
            if on_board(left_x) && on_lattice(left_x, y) {
                emit(left_x, y);
            }
            if on_board(right_x) && right_x != left_x && on_lattice(right_x, y) {
                emit(right_x, y);
            }
        }
    }

    Ok(out)
}
