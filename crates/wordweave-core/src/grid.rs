//! The 2-D cell matrix.

use crate::{
    cell::Cell,
    position::{BoardDims, Position},
};

/// A `rows x cols` matrix of cells.
///
/// Blocked positions are represented as absence (`None`), not as empty
/// cells. The static grid built by [`Puzzle::build`](crate::Puzzle::build)
/// holds no letters; the game session clones it and mutates the clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: BoardDims,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    pub(crate) fn empty(dims: BoardDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
        }
    }

    pub(crate) fn slot_mut(&mut self, pos: Position) -> Option<&mut Option<Cell>> {
        let index = self.dims.index_of(pos)?;
        Some(&mut self.cells[index])
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    /// Returns the cell at `pos`, or `None` if blocked or out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let index = self.dims.index_of(pos)?;
        self.cells[index].as_ref()
    }

    /// Returns the cell at `pos` mutably, or `None` if blocked or out of
    /// bounds.
    #[must_use]
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let index = self.dims.index_of(pos)?;
        self.cells[index].as_mut()
    }

    /// Iterates over all active cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let cols = self.dims.cols;
        self.cells.iter().enumerate().filter_map(move |(i, slot)| {
            let cell = slot.as_ref()?;
            Some((Position::new(i / cols, i % cols), cell))
        })
    }

    /// Number of active cells (intersections counted once).
    #[must_use]
    pub fn active_cell_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns a copy of this grid with every letter cleared.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let mut grid = self.clone();
        for slot in &mut grid.cells {
            if let Some(cell) = slot {
                cell.clear_letter();
            }
        }
        grid
    }
}
