//! Coordinate algebra and whole-grid transforms.
//!
//! Grids are [`ndarray::Array2`] values with zero-based `(row, column)`
//! coordinates; the cell type is opaque. Transforms return new grids, the
//! input is never mutated.

use ndarray::Array2;

/// Zero-based (row, column) grid position.
pub type Coord = (usize, usize);

/// A (row delta, column delta) step.
pub type Direction = (isize, isize);

/// North, East, South, West.
pub const CARDINAL: [Direction; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Northeast, Southeast, Southwest, Northwest.
pub const DIAGONAL: [Direction; 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Cardinal directions followed by the diagonals. Callers may rely on
/// enumeration order, so the sets are fixed.
pub const ALL: [Direction; 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// Whether a (possibly negative) coordinate falls inside the grid.
pub fn in_bounds<T>(grid: &Array2<T>, row: isize, col: isize) -> bool {
    let (rows, cols) = grid.dim();
    row >= 0 && (row as usize) < rows && col >= 0 && (col as usize) < cols
}

/// Coordinates one step from `at` in each of `directions`, in direction
/// order. Steps that leave the grid are skipped, not reported.
pub fn neighbors<'a, T>(
    grid: &'a Array2<T>,
    at: Coord,
    directions: &'a [Direction],
) -> impl Iterator<Item = Coord> + 'a {
    directions.iter().filter_map(move |&(drow, dcol)| {
        let row = at.0 as isize + drow;
        let col = at.1 as isize + dcol;
        in_bounds(grid, row, col).then_some((row as usize, col as usize))
    })
}

/// Every coordinate holding `value`, in row-major order.
pub fn find_all<'a, T: PartialEq>(
    grid: &'a Array2<T>,
    value: &'a T,
) -> impl Iterator<Item = Coord> + 'a {
    grid.indexed_iter()
        .filter(move |(_, cell)| *cell == value)
        .map(|(at, _)| at)
}

/// New grid rotated 90 degrees clockwise; the extents swap. Four
/// rotations reproduce the original.
pub fn rotate_clockwise<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((cols, rows), |(row, col)| {
        grid[(rows - 1 - col, row)].clone()
    })
}

/// New grid with columns mirrored within each row. Two flips reproduce
/// the original.
pub fn flip_horizontal<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        grid[(row, cols - 1 - col)].clone()
    })
}

/// Row-major dump for eyeballing a grid while debugging. Not part of any
/// algorithmic contract.
pub fn render<T: std::fmt::Display>(grid: &Array2<T>) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for cell in row {
            out.push_str(&cell.to_string());
        }
        out.push('\n');
    }
    out
}
