mod parse;

use thiserror::Error;

/// Index of a cell in the map's storage. Ids are dense, row-major.
pub type CellId = usize;

/// Number of neighbor slots per cell. Boundary cells leave some slots empty.
pub const NEIGHBOR_SLOTS: usize = 6;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid map: {0}")]
    Invalid(String),
}

/// Traversal state of a cell during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitState {
    #[default]
    Unvisited,
    Enqueued,
    Finalized,
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    /// Slots 0-5 clockwise: NW, NE, E, SE, SW, W. `None` past the grid edge.
    pub neighbors: [Option<CellId>; NEIGHBOR_SLOTS],
    pub no_fly: bool,
    pub interference: bool,
    pub is_destination: bool,
    pub distance: u32,
    pub predecessor: Option<CellId>,
    pub state: VisitState,
}

/// A hexagonal grid in odd-r offset layout: odd rows sit half a cell to the
/// right of even rows, so adjacent cell centers are unit distance apart.
///
/// The map owns every cell; the search driver mutates only the per-cell
/// search fields (`distance`, `predecessor`, `state`) through `cell_mut`.
#[derive(Clone, Debug)]
pub struct HexMap {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    origin: CellId,
    destination: CellId,
}

/// Row-relative neighbor offsets `(dcol, drow)` in slot order, one table per
/// row parity.
const EVEN_ROW_OFFSETS: [(isize, isize); NEIGHBOR_SLOTS] =
    [(-1, -1), (0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0)];
const ODD_ROW_OFFSETS: [(isize, isize); NEIGHBOR_SLOTS] =
    [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 0)];

impl HexMap {
    pub fn origin(&self) -> CellId {
        self.origin
    }

    pub fn destination(&self) -> CellId {
        self.destination
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id]
    }

    /// The neighbor in the given slot, or `None` past the grid edge.
    pub fn neighbor(&self, id: CellId, slot: usize) -> Option<CellId> {
        self.cells[id].neighbors[slot]
    }

    /// Straight-line distance from a cell's center to the destination's
    /// center. Adjacent centers are unit distance apart, so this never
    /// overestimates the remaining hop count.
    pub fn heuristic(&self, id: CellId) -> f64 {
        let (x, y) = self.center(id);
        let (dx, dy) = self.center(self.destination);
        ((x - dx).powi(2) + (y - dy).powi(2)).sqrt()
    }

    /// Restores every cell's search fields to their pre-search values so the
    /// map can be searched again.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.distance = u32::MAX;
            cell.predecessor = None;
            cell.state = VisitState::Unvisited;
        }
    }

    fn center(&self, id: CellId) -> (f64, f64) {
        let cell = &self.cells[id];
        let x = cell.col as f64 + 0.5 * (cell.row % 2) as f64;
        let y = cell.row as f64 * (3f64.sqrt() / 2.0);
        (x, y)
    }

    fn build_adjacency(&mut self) {
        for id in 0..self.cells.len() {
            let (col, row) = (self.cells[id].col, self.cells[id].row);
            let offsets = if row % 2 == 0 { EVEN_ROW_OFFSETS } else { ODD_ROW_OFFSETS };
            for (slot, (dc, dr)) in offsets.iter().enumerate() {
                let ncol = col as isize + dc;
                let nrow = row as isize + dr;
                if ncol < 0 || nrow < 0 || ncol >= self.width as isize || nrow >= self.height as isize
                {
                    continue;
                }
                self.cells[id].neighbors[slot] = Some(nrow as usize * self.width + ncol as usize);
            }
        }
    }
}
