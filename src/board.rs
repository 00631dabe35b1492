use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::tetromino::{Shape, TetrominoType};

pub type Cell = Option<TetrominoType>;
pub type Row = [Cell; GRID_WIDTH];

/// The 10x20 playfield. `(x, y)` with `x` growing right and `y` growing down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Row; GRID_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// `None` when `(x, y)` lies outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Returns false if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.cells.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Would `shape`, anchored at `pos` and shifted by `(dx, dy)`, overlap a wall,
    /// the floor, or a locked cell? Rows above the grid never collide.
    pub fn collides(&self, shape: &Shape, pos: (i32, i32), dx: i32, dy: i32) -> bool {
        for (col, row) in shape.cells() {
            let x = pos.0 + col + dx;
            let y = pos.1 + row + dy;
            if x < 0 || x >= GRID_WIDTH as i32 || y >= GRID_HEIGHT as i32 {
                return true;
            }
            if y >= 0 && self.cells[y as usize][x as usize].is_some() {
                return true;
            }
        }
        false
    }

    /// Writes `kind` into every cell the shape covers. Cells still above the
    /// grid are dropped.
    pub fn lock(&mut self, shape: &Shape, pos: (i32, i32), kind: TetrominoType) {
        for (col, row) in shape.cells() {
            self.set(pos.0 + col, pos.1 + row, Some(kind));
        }
    }

    /// Removes every full row at once and refills from the top.
    /// Returns how many rows were removed.
    pub fn clear_lines(&mut self) -> usize {
        let kept: Vec<Row> = self
            .cells
            .iter()
            .filter(|row| !row.iter().all(Option::is_some))
            .copied()
            .collect();
        let cleared = GRID_HEIGHT - kept.len();
        if cleared == 0 {
            return 0;
        }

        let mut cells = [[None; GRID_WIDTH]; GRID_HEIGHT];
        for (slot, row) in cells[cleared..].iter_mut().zip(kept) {
            *slot = row;
        }
        self.cells = cells;
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, except: Option<i32>) {
        for x in 0..GRID_WIDTH as i32 {
            if Some(x) != except {
                board.set(x, y, Some(TetrominoType::I));
            }
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, GRID_HEIGHT as i32), None);
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let o = TetrominoType::O.shape();
        assert!(!board.collides(&o, (0, 0), 0, 0));
        assert!(board.collides(&o, (0, 0), -1, 0));
        assert!(board.collides(&o, (8, 0), 1, 0));
        assert!(board.collides(&o, (0, 18), 0, 1));
    }

    #[test]
    fn rows_above_the_grid_never_collide() {
        let mut board = Board::new();
        fill_row(&mut board, 0, None);
        let o = TetrominoType::O.shape();
        assert!(!board.collides(&o, (4, -2), 0, 0));
        assert!(board.collides(&o, (4, -1), 0, 0));
        // Horizontal bounds still apply above the grid.
        assert!(board.collides(&o, (-1, -5), 0, 0));
    }

    #[test]
    fn lock_drops_cells_above_the_grid() {
        let mut board = Board::new();
        let i = TetrominoType::I.shape().rotate_clockwise();
        board.lock(&i, (3, -2), TetrominoType::I);
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.get(3, 0), Some(Some(TetrominoType::I)));
        assert_eq!(board.get(3, 1), Some(Some(TetrominoType::I)));
    }

    #[test]
    fn clear_lines_without_full_rows_is_noop() {
        let mut board = Board::new();
        fill_row(&mut board, 19, Some(0));
        let before = board.clone();
        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn non_adjacent_full_rows_clear_together() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        board.set(2, 18, Some(TetrominoType::T));
        fill_row(&mut board, 17, None);
        board.set(5, 16, Some(TetrominoType::S));

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.get(2, 19), Some(Some(TetrominoType::T)));
        assert_eq!(board.get(5, 18), Some(Some(TetrominoType::S)));
    }
}
