//! Board module - manages the playfield grid
//!
//! The board is a `height x width` grid of [`Cell`]s stored as a flat row-major
//! vector. It owns no game rules: the simulator decides what goes where, the board
//! only stores it and validates coordinates.

use crate::rng::SimpleRng;
use crate::types::{Cell, Position};

/// Number of random probes before `random_empty` falls back to a full scan.
const RANDOM_PROBES: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Row-major cells (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.width as usize) + (pos.col as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && pos.row < self.height as i32
            && pos.col < self.width as i32
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Write a cell.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is outside the board. Callers keep positions in range
    /// through the mode rules, so reaching this is a logic error.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let Some(idx) = self.index(pos) else {
            panic!(
                "board write out of bounds: {:?} on {}x{} board",
                pos, self.width, self.height
            );
        };
        self.cells[idx] = cell;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Every board position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    /// Pick a random empty cell.
    ///
    /// Returns `None` only when no empty cell is left.
    pub fn random_empty(&self, rng: &mut SimpleRng) -> Option<Position> {
        self.random_empty_except(rng, None)
    }

    /// Like [`Board::random_empty`], never returning `exclude`.
    pub fn random_empty_except(
        &self,
        rng: &mut SimpleRng,
        exclude: Option<Position>,
    ) -> Option<Position> {
        if self.cells.is_empty() {
            return None;
        }
        let accept = |pos: Position, cell: Cell| cell.is_empty() && Some(pos) != exclude;

        for _ in 0..RANDOM_PROBES {
            let row = rng.next_range(self.height as u32) as i32;
            let col = rng.next_range(self.width as u32) as i32;
            let pos = Position::new(row, col);
            if let Some(cell) = self.get(pos) {
                if accept(pos, cell) {
                    return Some(pos);
                }
            }
        }

        // Crowded board: choose uniformly among the remaining empty cells.
        let empties: Vec<Position> = self
            .iter()
            .filter(|&(pos, cell)| accept(pos, cell))
            .map(|(pos, _)| pos)
            .collect();
        if empties.is_empty() {
            return None;
        }
        let pick = rng.next_range(empties.len() as u32) as usize;
        Some(empties[pick])
    }

    /// Remove every food marker.
    pub fn clear_food(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Food {
                *cell = Cell::Empty;
            }
        }
    }

    /// Build a board from legacy integer codes, one row per slice.
    ///
    /// Unknown codes become empty cells.
    pub fn from_codes(rows: &[&[i32]]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u16;
        let mut board = Self::new(width, height);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize, "ragged board rows");
            for (c, code) in row.iter().enumerate() {
                let cell = Cell::from_code(*code).unwrap_or_default();
                board.set(Position::new(r as i32, c as i32), cell);
            }
        }
        board
    }

    /// Legacy integer codes, row by row.
    pub fn to_codes(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
