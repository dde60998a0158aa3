mod puzzle;
mod renderer;

use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};

use puzzle::{Position, PuzzleGrid};
use renderer::GridRenderer;

fn main() -> crossterm::Result<()> {
    let mut grid = PuzzleGrid::default();
    let mut renderer = GridRenderer::new();

    renderer.enter()?;
    let result = run(&mut grid, &mut renderer);
    renderer.leave()?;
    result
}

/// One input event at a time; the grid is never touched between events.
fn run(grid: &mut PuzzleGrid, renderer: &mut GridRenderer) -> crossterm::Result<()> {
    let mut hovered: Option<Position> = None;
    renderer.draw(grid)?;

    loop {
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('s') => {
                    if let Some(position) = hovered {
                        grid.hover_end(position);
                    }
                    grid.shuffle();
                    if let Some(position) = hovered {
                        grid.hover(position);
                    }
                    renderer.draw(grid)?;
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved => {
                    let current = renderer::position_at(mouse.column, mouse.row);
                    if current != hovered {
                        if let Some(previous) = hovered {
                            grid.hover_end(previous);
                        }
                        if let Some(position) = current {
                            grid.hover(position);
                        }
                        hovered = current;
                        renderer.draw(grid)?;
                    }
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(position) = renderer::position_at(mouse.column, mouse.row) {
                        let former_empty = grid.empty_position();
                        if grid.move_tile(position) {
                            // The mover slid out from under the cursor.
                            grid.hover_end(former_empty);
                            renderer.draw(grid)?;
                        }
                    }
                }
                _ => {}
            },
            Event::Resize(..) => renderer.draw(grid)?,
            _ => {}
        }
    }
    Ok(())
}
