use macroquad::color::Color;
use rand::Rng;

/// The seven catalog variants, in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    S,
    Z,
    L,
    J,
    T,
}

pub const ALL_TYPES: [TetrominoType; 7] = [
    TetrominoType::I,
    TetrominoType::O,
    TetrominoType::S,
    TetrominoType::Z,
    TetrominoType::L,
    TetrominoType::J,
    TetrominoType::T,
];

const TETROMINO_SHAPES: [&[&[u8]]; 7] = [
    &[&[1, 1, 1, 1]],                 // I
    &[&[1, 1], &[1, 1]],              // O
    &[&[0, 1, 1], &[1, 1, 0]],        // S
    &[&[1, 1, 0], &[0, 1, 1]],        // Z
    &[&[1, 0, 0], &[1, 1, 1]],        // L
    &[&[0, 0, 1], &[1, 1, 1]],        // J
    &[&[0, 1, 0], &[1, 1, 1]],        // T
];

const NES_COLORS: [Color; 7] = [
    Color { r: 0.0,    g: 1.0,    b: 1.0,    a: 1.0 }, // I
    Color { r: 1.0,    g: 1.0,    b: 0.0,    a: 1.0 }, // O
    Color { r: 0.0,    g: 1.0,    b: 0.0,    a: 1.0 }, // S
    Color { r: 1.0,    g: 0.0,    b: 0.0,    a: 1.0 }, // Z
    Color { r: 1.0,    g: 0.3334, b: 0.0,    a: 1.0 }, // L
    Color { r: 0.0,    g: 0.0,    b: 1.0,    a: 1.0 }, // J
    Color { r: 0.6667, g: 0.0,    b: 1.0,    a: 1.0 }, // T
];

impl TetrominoType {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> Color {
        NES_COLORS[self.index()]
    }

    /// A fresh copy of the catalog shape in spawn orientation.
    pub fn shape(self) -> Shape {
        let rows: Vec<Vec<bool>> = TETROMINO_SHAPES[self.index()]
            .iter()
            .map(|row| row.iter().map(|&c| c != 0).collect())
            .collect();
        Shape { rows }
    }
}

/// Uniform pick over the seven variants.
pub fn random_variant<R: Rng + ?Sized>(rng: &mut R) -> TetrominoType {
    ALL_TYPES[rng.gen_range(0..ALL_TYPES.len())]
}

/// Rectangular occupancy matrix, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Builds a shape from rows of equal, non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Shape { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Occupied cells as `(col, row)` offsets from the top-left anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(c, _)| (c as i32, r as i32))
        })
    }

    /// 90° clockwise: `new[c][rows - 1 - r] = old[r][c]`.
    pub fn rotate_clockwise(&self) -> Shape {
        let (h, w) = (self.height(), self.width());
        let mut rows = vec![vec![false; h]; w];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                rows[c][h - 1 - r] = filled;
            }
        }
        Shape { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_variant_has_four_cells() {
        for t in ALL_TYPES {
            assert_eq!(t.shape().cells().count(), 4, "{:?}", t);
        }
    }

    #[test]
    fn index_matches_catalog_order() {
        for (i, t) in ALL_TYPES.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn i_piece_turns_vertical() {
        let rotated = TetrominoType::I.shape().rotate_clockwise();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
    }

    #[test]
    fn t_piece_rotates_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = TetrominoType::T.shape().rotate_clockwise();
        let expected = Shape::from_rows(vec![
            vec![true, false],
            vec![true, true],
            vec![true, false],
        ])
        .unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn square_rotation_is_identity() {
        let o = TetrominoType::O.shape();
        assert_eq!(o.rotate_clockwise(), o);
    }

    #[test]
    fn rotation_leaves_catalog_untouched() {
        let _ = TetrominoType::L.shape().rotate_clockwise();
        assert_eq!(TetrominoType::L.shape().height(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Shape::from_rows(vec![vec![true], vec![true, true]]).is_none());
        assert!(Shape::from_rows(vec![]).is_none());
        assert!(Shape::from_rows(vec![vec![]]).is_none());
    }

    #[test]
    fn random_variant_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[random_variant(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
