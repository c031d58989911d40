//! Puzzle piece definitions and built-in puzzle data.
//!
//! Each piece is a set of unit cube positions in its own local space. Name
//! and color are carried along for display purposes only; the solver never
//! looks at them.

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// A puzzle piece: a named, non-empty set of unit cubes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Display name, echoed in the solve log.
    pub name: String,
    /// Opaque display color, passed through untouched.
    pub color: Option<String>,
    /// Cells in piece-local space; any translation is fine, placements are
    /// anchored independently of the origin.
    pub cells: Vec<Coord>,
}

impl Piece {
    /// Creates a piece without a display color.
    pub fn new(name: impl Into<String>, cells: Vec<Coord>) -> Self {
        Self {
            name: name.into(),
            color: None,
            cells,
        }
    }

    /// Creates a piece with a display color.
    pub fn with_color(
        name: impl Into<String>,
        cells: Vec<Coord>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: Some(color.into()),
            cells,
        }
    }

    /// Number of unit cubes in this piece.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// The seven Soma cube pieces that fill a 3x3x3 cube.
///
/// The classic set: one tromino plus six tetrominoes, 27 cells in total.
pub fn soma_pieces() -> Vec<Piece> {
    vec![
        // flat V (3 cubes)
        Piece::with_color("V", vec![(0, 0, 0), (1, 0, 0), (0, 1, 0)], "#e74c3c"),
        // flat L (4 cubes)
        Piece::with_color("L", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)], "#3498db"),
        // flat T (4 cubes)
        Piece::with_color("T", vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)], "#2ecc71"),
        // flat S (4 cubes)
        Piece::with_color("S", vec![(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0)], "#f39c12"),
        // corner tripod (4 cubes)
        Piece::with_color("A", vec![(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)], "#9b59b6"),
        // branch tripod (4 cubes)
        Piece::with_color("B", vec![(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 0, 1)], "#1abc9c"),
        // skew chain (4 cubes)
        Piece::with_color("P", vec![(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 0, 1)], "#e67e22"),
    ]
}

/// Creates a solid box target of the given dimensions.
pub fn box_target(sx: i32, sy: i32, sz: i32) -> Vec<Coord> {
    let mut cells = Vec::new();
    for x in 0..sx {
        for y in 0..sy {
            for z in 0..sz {
                cells.push((x, y, z));
            }
        }
    }
    cells
}

/// Builds a target from per-layer 0/1 grids.
///
/// `layers[z][y][x]` nonzero marks a filled cell, so `layers[0]` describes
/// the z = 0 slice, `layers[1]` the slice above it, and so on.
pub fn target_from_layers(layers: &[Vec<Vec<u8>>]) -> Vec<Coord> {
    let mut cells = Vec::new();
    for (z, layer) in layers.iter().enumerate() {
        for (y, row) in layer.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled != 0 {
                    cells.push((x as i32, y as i32, z as i32));
                }
            }
        }
    }
    cells
}
