use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    Result,
};

use crate::puzzle::{Position, PuzzleGrid, Tile, GRID_SIZE};

/// Footprint of one tile in terminal cells.
pub const TILE_WIDTH: u16 = 8;
pub const TILE_HEIGHT: u16 = 3;
pub const BOARD_MARGIN_X: u16 = 2;
pub const BOARD_MARGIN_Y: u16 = 1;

const TILE_BG: Color = Color::DarkBlue;
const TILE_FG: Color = Color::White;
const HIGHLIGHT_BG: Color = Color::DarkYellow;
const HIGHLIGHT_FG: Color = Color::Black;

/// Screen offset of a grid cell. The renderer always derives screen
/// coordinates from logical positions, never the reverse.
pub fn cell_origin(position: Position) -> (u16, u16) {
    (
        BOARD_MARGIN_X + position.col as u16 * TILE_WIDTH,
        BOARD_MARGIN_Y + position.row as u16 * TILE_HEIGHT,
    )
}

/// Grid cell under a terminal coordinate, or `None` outside the board.
pub fn position_at(column: u16, row: u16) -> Option<Position> {
    let x = column.checked_sub(BOARD_MARGIN_X)?;
    let y = row.checked_sub(BOARD_MARGIN_Y)?;
    let col = (x / TILE_WIDTH) as usize;
    let row = (y / TILE_HEIGHT) as usize;
    if row < GRID_SIZE && col < GRID_SIZE {
        Some(Position::new(row, col))
    } else {
        None
    }
}

/// Terminal drawing surface. Re-reads the full grid state on every draw;
/// the board is small enough that diffing is not worth it.
pub struct GridRenderer {
    out: Stdout,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        execute!(self.out, DisableMouseCapture, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, grid: &PuzzleGrid) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for tile in grid.tiles() {
            self.draw_tile(tile)?;
        }
        let status_row = BOARD_MARGIN_Y + TILE_HEIGHT * GRID_SIZE as u16 + 1;
        queue!(
            self.out,
            ResetColor,
            MoveTo(BOARD_MARGIN_X, status_row),
            Print("click a highlighted tile to slide it   [s] shuffle  [q] quit"),
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn draw_tile(&mut self, tile: &Tile) -> Result<()> {
        let (x, y) = cell_origin(tile.position());
        let (bg, fg) = if tile.is_highlighted() {
            (HIGHLIGHT_BG, HIGHLIGHT_FG)
        } else {
            (TILE_BG, TILE_FG)
        };
        queue!(self.out, SetBackgroundColor(bg), SetForegroundColor(fg))?;
        for dy in 0..TILE_HEIGHT {
            queue!(self.out, MoveTo(x, y + dy))?;
            if dy == TILE_HEIGHT / 2 {
                let label = format!("{:^1$}", tile.label(), TILE_WIDTH as usize);
                queue!(self.out, Print(label))?;
            } else {
                queue!(self.out, Print(" ".repeat(TILE_WIDTH as usize)))?;
            }
        }
        queue!(self.out, ResetColor)?;
        Ok(())
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_origin_scales_by_tile_size() {
        assert_eq!(cell_origin(Position::new(0, 0)), (BOARD_MARGIN_X, BOARD_MARGIN_Y));
        assert_eq!(
            cell_origin(Position::new(2, 3)),
            (BOARD_MARGIN_X + 3 * TILE_WIDTH, BOARD_MARGIN_Y + 2 * TILE_HEIGHT)
        );
    }

    #[test]
    fn hit_test_inverts_cell_origin() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let position = Position::new(row, col);
                let (x, y) = cell_origin(position);
                // Anywhere inside the tile block maps back to the same cell.
                assert_eq!(position_at(x, y), Some(position));
                assert_eq!(
                    position_at(x + TILE_WIDTH - 1, y + TILE_HEIGHT - 1),
                    Some(position)
                );
            }
        }
    }

    #[test]
    fn hit_test_rejects_margins_and_beyond() {
        assert_eq!(position_at(0, 0), None);
        assert_eq!(position_at(BOARD_MARGIN_X - 1, BOARD_MARGIN_Y), None);
        let (x, y) = cell_origin(Position::new(3, 3));
        assert_eq!(position_at(x + TILE_WIDTH, y), None);
        assert_eq!(position_at(x, y + TILE_HEIGHT), None);
        assert_eq!(position_at(500, 500), None);
    }
}
