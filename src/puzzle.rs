use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use std::fmt;

pub const GRID_SIZE: usize = 4;
pub const SHUFFLE_MOVES: usize = 1000;

/// A grid cell, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonally adjacent: same row or column, exactly one step apart.
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    label: u8,
    position: Position,
    highlighted: bool,
}

impl Tile {
    pub fn label(&self) -> u8 {
        self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Owner of the full board state: one tile per cell except the single
/// empty slot. Every mutation goes through [`PuzzleGrid::move_tile`].
#[derive(Clone)]
pub struct PuzzleGrid {
    size: usize,
    tiles: Vec<Tile>,
    empty: Position,
}

impl PuzzleGrid {
    /// A solved board: labels 1.. in row-major order, empty slot at the
    /// bottom-right corner.
    pub fn new(size: usize) -> Self {
        let mut tiles = Vec::with_capacity(size * size - 1);
        let mut label = 1;

        for row in 0..size {
            for col in 0..size {
                if row == size - 1 && col == size - 1 {
                    continue; // the empty slot
                }
                tiles.push(Tile {
                    label,
                    position: Position::new(row, col),
                    highlighted: false,
                });
                label += 1;
            }
        }

        Self {
            size,
            tiles,
            empty: Position::new(size - 1, size - 1),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn empty_position(&self) -> Position {
        self.empty
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// True iff the cell holds a tile that can slide into the empty slot.
    /// Out-of-bounds positions and the empty cell itself are not movable.
    pub fn is_movable(&self, position: Position) -> bool {
        self.in_bounds(position) && position.is_adjacent(self.empty)
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Slides the tile at `position` into the empty slot. Returns `false`
    /// without touching the board when the cell is not movable (non-adjacent,
    /// out of bounds, or the empty cell itself).
    pub fn move_tile(&mut self, position: Position) -> bool {
        if !self.is_movable(position) {
            return false;
        }
        let Some(tile) = self
            .tiles
            .iter_mut()
            .find(|tile| tile.position == position)
        else {
            return false;
        };
        tile.position = self.empty;
        self.empty = position;
        true
    }

    /// Tiles adjacent to the empty slot, in row-major scan order. For any
    /// reachable 4x4 board this holds between 2 and 4 tiles.
    pub fn find_movable_tiles(&self) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|tile| self.is_movable(tile.position))
            .collect()
    }

    /// Randomizes the board with [`SHUFFLE_MOVES`] legal moves. Moving only
    /// neighbors of the empty slot keeps the board reachable from the solved
    /// state, so the result is always solvable.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng(), SHUFFLE_MOVES);
    }

    /// Same as [`PuzzleGrid::shuffle`] with an explicit move count and random
    /// source; a seeded rng makes the result deterministic.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R, moves: usize) {
        for _ in 0..moves {
            // Re-collected every iteration: the movable set changes per move.
            let movable: Vec<Position> = self
                .find_movable_tiles()
                .iter()
                .map(|tile| tile.position)
                .collect();
            if let Some(position) = movable.choose(rng) {
                self.move_tile(*position);
            }
        }
    }

    /// Marks the tile at `position` highlighted if it can be moved.
    pub fn hover(&mut self, position: Position) {
        if !self.is_movable(position) {
            return;
        }
        if let Some(tile) = self
            .tiles
            .iter_mut()
            .find(|tile| tile.position == position)
        {
            tile.highlighted = true;
        }
    }

    /// Clears the highlight on the tile at `position`, movable or not.
    pub fn hover_end(&mut self, position: Position) {
        if let Some(tile) = self
            .tiles
            .iter_mut()
            .find(|tile| tile.position == position)
        {
            tile.highlighted = false;
        }
    }
}

impl Default for PuzzleGrid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.tile_at(Position::new(row, col)) {
                    Some(tile) => write!(f, "{:2} ", tile.label())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
