//! Where each cell sits on screen, shared by drawing and mouse hit-testing.

use ratatui::layout::Rect;
use tictactoe_rules::Position;

/// Screen rectangles of the nine cells for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Width of one cell including its border.
    pub const CELL_WIDTH: u16 = 11;
    /// Height of one cell including its border.
    pub const CELL_HEIGHT: u16 = 5;

    /// Centers the 3x3 grid in `area`. Cells are clipped to `area`.
    pub fn new(area: Rect) -> Self {
        let width = Self::CELL_WIDTH * 3;
        let height = Self::CELL_HEIGHT * 3;
        let left = area.x + area.width.saturating_sub(width) / 2;
        let top = area.y + area.height.saturating_sub(height) / 2;

        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            let cell = Rect::new(
                left + pos.col() as u16 * Self::CELL_WIDTH,
                top + pos.row() as u16 * Self::CELL_HEIGHT,
                Self::CELL_WIDTH,
                Self::CELL_HEIGHT,
            );
            cells[pos.to_index()] = cell.intersection(area);
        }
        Self { cells }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Position of the cell containing the terminal coordinate, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cell(*pos);
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_centered() {
        let layout = BoardLayout::new(Rect::new(0, 0, 53, 25));
        assert_eq!(layout.cell(Position::TopLeft), Rect::new(10, 5, 11, 5));
        assert_eq!(layout.cell(Position::BottomRight), Rect::new(32, 15, 11, 5));
    }

    #[test]
    fn test_hit_every_cell_center() {
        let layout = BoardLayout::new(Rect::new(3, 2, 60, 20));
        for pos in Position::ALL {
            let r = layout.cell(pos);
            assert_eq!(layout.hit(r.x + r.width / 2, r.y + r.height / 2), Some(pos));
            assert_eq!(layout.hit(r.x, r.y), Some(pos));
            assert_eq!(layout.hit(r.right() - 1, r.bottom() - 1), Some(pos));
        }
    }

    #[test]
    fn test_hit_outside_grid() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        let top_left = layout.cell(Position::TopLeft);
        let bottom_right = layout.cell(Position::BottomRight);
        assert_eq!(layout.hit(0, 0), None);
        assert_eq!(layout.hit(top_left.x - 1, top_left.y), None);
        assert_eq!(layout.hit(bottom_right.right(), bottom_right.y), None);
        assert_eq!(layout.hit(bottom_right.x, bottom_right.bottom()), None);
    }

    #[test]
    fn test_tiny_area_clips_cells() {
        let area = Rect::new(0, 0, 12, 4);
        let layout = BoardLayout::new(area);
        for pos in Position::ALL {
            let r = layout.cell(pos);
            assert!(r.is_empty() || (r.right() <= area.right() && r.bottom() <= area.bottom()));
            if r.is_empty() {
                assert_eq!(layout.hit(r.x, r.y), None);
            }
        }
    }
}
