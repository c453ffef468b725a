use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Board frame constants
pub const FRAME_SIZE: usize = 10;
pub const QUADRANT_SIZE: usize = 4;
/// First and last playable row/column inside the frame
pub const INTERIOR_MIN: usize = 1;
pub const INTERIOR_MAX: usize = 8;

/// Cell colors of the playable board. Each color grants the movement of one
/// chess piece to the pawn standing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow, // bishop
    Green,  // knight
    Blue,   // king
    Red,    // rook
}

impl Color {
    /// Numeric codes used by the quadrant library files
    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::Yellow),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Red),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Red => 4,
        }
    }

    pub fn template(&self) -> Template {
        match self {
            Color::Yellow => Template::Bishop,
            Color::Green => Template::Knight,
            Color::Blue => Template::King,
            Color::Red => Template::Rook,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Movement template a cell color maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
    King,
    Rook,
    Bishop,
    Knight,
}

/// Quadrant orientation, in 90°-clockwise steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn all() -> [Rotation; 4] {
        [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270]
    }

    pub fn from_degrees(degrees: u16) -> Option<Rotation> {
        match degrees {
            0 => Some(Rotation::R0),
            90 => Some(Rotation::R90),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R270),
            _ => None,
        }
    }

    fn quarter_turns(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("quadrant grid must be {QUADRANT_SIZE}x{QUADRANT_SIZE}, got {rows}x{cols}")]
    BadQuadrantShape { rows: usize, cols: usize },
    #[error("unknown color code {0}")]
    BadColorCode(u8),
    #[error("no quadrant named '{0}' in the library")]
    UnknownQuadrant(String),
}

/// A 4x4 colored tile; four of them compose one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quadrant {
    cells: [[Color; QUADRANT_SIZE]; QUADRANT_SIZE],
}

impl Quadrant {
    pub fn new(cells: [[Color; QUADRANT_SIZE]; QUADRANT_SIZE]) -> Self {
        Quadrant { cells }
    }

    /// Build from the library's integer color codes, rejecting malformed data
    pub fn from_codes(codes: &[Vec<u8>]) -> Result<Self, BoardError> {
        if codes.len() != QUADRANT_SIZE || codes.iter().any(|row| row.len() != QUADRANT_SIZE) {
            return Err(BoardError::BadQuadrantShape {
                rows: codes.len(),
                cols: codes.first().map_or(0, Vec::len),
            });
        }

        let mut cells = [[Color::Yellow; QUADRANT_SIZE]; QUADRANT_SIZE];
        for (r, row) in codes.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                cells[r][c] = Color::from_code(code).ok_or(BoardError::BadColorCode(code))?;
            }
        }

        Ok(Quadrant { cells })
    }

    pub fn color_at(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    /// Apply an orientation by composing 90°-clockwise turns
    pub fn rotated(&self, rotation: Rotation) -> Quadrant {
        let mut cells = self.cells;
        for _ in 0..rotation.quarter_turns() {
            let source = cells;
            for (r, row) in source.iter().enumerate() {
                for (c, &color) in row.iter().enumerate() {
                    cells[c][QUADRANT_SIZE - 1 - r] = color;
                }
            }
        }
        Quadrant { cells }
    }
}

/// One record of the user-maintained quadrant library; the engine only reads
/// the grid, the image path belongs to the editor UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadrantRecord {
    pub grid: Vec<Vec<u8>>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// The quadrant library, as stored by the quadrant editor in a single JSON
/// object keyed by quadrant id. Extra keys the editor caches (pre-rotated
/// grids, thumbnails) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuadrantLibrary {
    #[serde(flatten)]
    entries: HashMap<String, QuadrantRecord>,
}

impl QuadrantLibrary {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quadrant(&self, id: &str) -> Result<Quadrant, BoardError> {
        let record = self
            .entries
            .get(id)
            .ok_or_else(|| BoardError::UnknownQuadrant(id.to_string()))?;
        Quadrant::from_codes(&record.grid)
    }
}

/// The assembled 10x10 board frame. Rows/columns 1..=8 are the playable
/// interior and carry colors; the border is colorless. The four absolute
/// corners double as Katarenga camp cells. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Color>; FRAME_SIZE]; FRAME_SIZE],
}

impl Board {
    /// Assemble from four quadrants, in top-left, top-right, bottom-left,
    /// bottom-right order, each already rotated to its chosen orientation.
    pub fn from_quadrants(quadrants: [Quadrant; 4]) -> Board {
        let offsets = [(1, 1), (1, 5), (5, 1), (5, 5)];
        let mut cells = [[None; FRAME_SIZE]; FRAME_SIZE];

        for (quadrant, (row_off, col_off)) in quadrants.iter().zip(offsets) {
            for r in 0..QUADRANT_SIZE {
                for c in 0..QUADRANT_SIZE {
                    cells[row_off + r][col_off + c] = Some(quadrant.color_at(r, c));
                }
            }
        }

        Board { cells }
    }

    /// Look up four library quadrants by id, rotate each to its chosen
    /// orientation, and assemble them
    pub fn assemble(
        library: &QuadrantLibrary,
        picks: [(&str, Rotation); 4],
    ) -> Result<Board, BoardError> {
        let [a, b, c, d] = picks;
        Ok(Board::from_quadrants([
            library.quadrant(a.0)?.rotated(a.1),
            library.quadrant(b.0)?.rotated(b.1),
            library.quadrant(c.0)?.rotated(c.1),
            library.quadrant(d.0)?.rotated(d.1),
        ]))
    }

    /// Fill the interior from a color function; the border stays colorless
    pub fn from_fn(color: impl Fn(usize, usize) -> Color) -> Board {
        let mut cells = [[None; FRAME_SIZE]; FRAME_SIZE];
        for row in INTERIOR_MIN..=INTERIOR_MAX {
            for col in INTERIOR_MIN..=INTERIOR_MAX {
                cells[row][col] = Some(color(row, col));
            }
        }
        Board { cells }
    }

    /// The fallback board used when no quadrants were picked: colors cycle
    /// diagonally through all four codes.
    pub fn checkerboard() -> Board {
        Board::from_fn(|row, col| match (row + col) % 4 {
            0 => Color::Yellow,
            1 => Color::Green,
            2 => Color::Blue,
            _ => Color::Red,
        })
    }

    /// Color lookup; None for the border, camps, and out-of-bounds queries
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        if Board::in_bounds(row, col) {
            self.cells[row][col]
        } else {
            None
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < FRAME_SIZE && col < FRAME_SIZE
    }

    pub fn is_interior(row: usize, col: usize) -> bool {
        (INTERIOR_MIN..=INTERIOR_MAX).contains(&row) && (INTERIOR_MIN..=INTERIOR_MAX).contains(&col)
    }

    /// The four absolute frame corners
    pub fn is_camp(row: usize, col: usize) -> bool {
        (row == 0 || row == FRAME_SIZE - 1) && (col == 0 || col == FRAME_SIZE - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_quadrant() -> Quadrant {
        // Distinct corner colors so rotations are observable
        Quadrant::from_codes(&[
            vec![1, 2, 2, 2],
            vec![3, 3, 3, 3],
            vec![4, 4, 4, 4],
            vec![2, 1, 1, 3],
        ])
        .unwrap()
    }

    #[test]
    fn test_color_codes_round_trip() {
        for code in 1..=4u8 {
            let color = Color::from_code(code).unwrap();
            assert_eq!(color.code(), code);
        }
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::from_code(5), None);
    }

    #[test]
    fn test_color_to_template() {
        assert_eq!(Color::Blue.template(), Template::King);
        assert_eq!(Color::Red.template(), Template::Rook);
        assert_eq!(Color::Yellow.template(), Template::Bishop);
        assert_eq!(Color::Green.template(), Template::Knight);
    }

    #[test]
    fn test_quadrant_rejects_bad_shape() {
        let short = vec![vec![1, 2, 3, 4]; 3];
        assert!(matches!(
            Quadrant::from_codes(&short),
            Err(BoardError::BadQuadrantShape { rows: 3, cols: 4 })
        ));

        let ragged = vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 3],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
        ];
        assert!(matches!(
            Quadrant::from_codes(&ragged),
            Err(BoardError::BadQuadrantShape { .. })
        ));
    }

    #[test]
    fn test_quadrant_rejects_bad_color_code() {
        let grid = vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 9, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
        ];
        assert!(matches!(
            Quadrant::from_codes(&grid),
            Err(BoardError::BadColorCode(9))
        ));
    }

    #[test]
    fn test_rotation_moves_top_left_corner() {
        let quadrant = numbered_quadrant();
        assert_eq!(quadrant.color_at(0, 0), Color::Yellow);

        // Clockwise: the top-left corner ends up top-right, then
        // bottom-right, then bottom-left
        let r90 = quadrant.rotated(Rotation::R90);
        assert_eq!(r90.color_at(0, 3), Color::Yellow);

        let r180 = quadrant.rotated(Rotation::R180);
        assert_eq!(r180.color_at(3, 3), Color::Yellow);

        let r270 = quadrant.rotated(Rotation::R270);
        assert_eq!(r270.color_at(3, 0), Color::Yellow);
    }

    #[test]
    fn test_four_quarter_turns_compose_to_identity() {
        let quadrant = numbered_quadrant();
        let full_turn = quadrant
            .rotated(Rotation::R90)
            .rotated(Rotation::R90)
            .rotated(Rotation::R90)
            .rotated(Rotation::R90);
        assert_eq!(full_turn, quadrant);
        assert_eq!(quadrant.rotated(Rotation::R0), quadrant);
    }

    #[test]
    fn test_board_assembly_offsets() {
        let q = Quadrant::from_codes(&vec![vec![3; 4]; 4]).unwrap();
        let marked = Quadrant::from_codes(&[
            vec![4, 3, 3, 3],
            vec![3, 3, 3, 3],
            vec![3, 3, 3, 3],
            vec![3, 3, 3, 3],
        ])
        .unwrap();

        // The marked tile sits bottom-right, so its red corner lands at (5,5)
        let board = Board::from_quadrants([q, q, q, marked]);
        assert_eq!(board.color_at(5, 5), Some(Color::Red));
        assert_eq!(board.color_at(1, 1), Some(Color::Blue));
        assert_eq!(board.color_at(8, 8), Some(Color::Blue));
    }

    #[test]
    fn test_border_and_out_of_bounds_have_no_color() {
        let board = Board::checkerboard();
        assert_eq!(board.color_at(0, 0), None);
        assert_eq!(board.color_at(0, 5), None);
        assert_eq!(board.color_at(9, 9), None);
        assert_eq!(board.color_at(10, 4), None);
        assert_eq!(board.color_at(4, 42), None);
        for row in INTERIOR_MIN..=INTERIOR_MAX {
            for col in INTERIOR_MIN..=INTERIOR_MAX {
                assert!(board.color_at(row, col).is_some());
            }
        }
    }

    #[test]
    fn test_camp_cells_are_the_frame_corners() {
        assert!(Board::is_camp(0, 0));
        assert!(Board::is_camp(0, 9));
        assert!(Board::is_camp(9, 0));
        assert!(Board::is_camp(9, 9));
        assert!(!Board::is_camp(0, 5));
        assert!(!Board::is_camp(1, 1));
    }

    #[test]
    fn test_library_parsing_ignores_editor_extras() {
        let json = r#"{
            "quadrant_1": {
                "grid": [[1,2,3,4],[4,3,2,1],[1,1,2,2],[3,3,4,4]],
                "image_path": "assets/img/quadrant_1.png",
                "rotations": {"0": [[1,2,3,4],[4,3,2,1],[1,1,2,2],[3,3,4,4]]}
            },
            "quadrant_2": {
                "grid": [[2,2,2,2],[2,2,2,2],[2,2,2,2],[2,2,2,2]]
            }
        }"#;

        let library = QuadrantLibrary::from_json(json).unwrap();
        assert_eq!(library.len(), 2);

        let q1 = library.quadrant("quadrant_1").unwrap();
        assert_eq!(q1.color_at(0, 0), Color::Yellow);
        assert_eq!(q1.color_at(0, 3), Color::Red);

        assert!(matches!(
            library.quadrant("quadrant_9"),
            Err(BoardError::UnknownQuadrant(_))
        ));
    }

    #[test]
    fn test_assemble_from_library_picks() {
        let json = r#"{
            "quadrant_1": {
                "grid": [[1,2,3,4],[2,2,2,2],[2,2,2,2],[2,2,2,2]]
            }
        }"#;
        let library = QuadrantLibrary::from_json(json).unwrap();

        let board = Board::assemble(
            &library,
            [
                ("quadrant_1", Rotation::R0),
                ("quadrant_1", Rotation::R90),
                ("quadrant_1", Rotation::R0),
                ("quadrant_1", Rotation::R0),
            ],
        )
        .unwrap();

        // Unrotated top-left tile: its first row lands on board row 1
        assert_eq!(board.color_at(1, 1), Some(Color::Yellow));
        assert_eq!(board.color_at(1, 4), Some(Color::Red));
        // Quarter-turned top-right tile: the first row now runs down the
        // right edge of the tile, so Yellow sits at (1,8)
        assert_eq!(board.color_at(1, 8), Some(Color::Yellow));
        assert_eq!(board.color_at(4, 8), Some(Color::Red));

        assert!(matches!(
            Board::assemble(&library, [("missing", Rotation::R0); 4]),
            Err(BoardError::UnknownQuadrant(_))
        ));
    }
}
