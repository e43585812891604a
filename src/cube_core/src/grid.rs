//! The primitive operations on a single 3x3 face grid.
//!
//! `grid[row][col]`, with rows and columns laid out the way
//! [`crate::mapper`] places them in 3-D. Every move is built out of the
//! operations here: a whole-grid [`GridTransform`] and the extraction and
//! splicing of a [`Line`].

/// The stickers of one face.
pub type FaceGrid<S> = [[S; 3]; 3];

/// All six faces, indexed by `Face as usize`.
pub type Stickers<S> = [FaceGrid<S>; 6];

/// A symmetry of the square grid.
///
/// The three rotations are what a face undergoes when its own layer turns.
/// The reflections appear when a whole-cube roll carries one face onto the slot
/// of a face whose row/column frame has the opposite handedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridTransform {
    Identity,
    Clockwise,
    CounterClockwise,
    Half,
    /// Reverses every row.
    MirrorHorizontal,
    /// Reverses every column.
    MirrorVertical,
    Transpose,
    AntiTranspose,
}

impl GridTransform {
    pub const ALL: [Self; 8] = [
        GridTransform::Identity,
        GridTransform::Clockwise,
        GridTransform::CounterClockwise,
        GridTransform::Half,
        GridTransform::MirrorHorizontal,
        GridTransform::MirrorVertical,
        GridTransform::Transpose,
        GridTransform::AntiTranspose,
    ];

    /// The cell of the input grid whose sticker ends up at `(row, col)`.
    pub const fn source(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            GridTransform::Identity => (row, col),
            GridTransform::Clockwise => (2 - col, row),
            GridTransform::CounterClockwise => (col, 2 - row),
            GridTransform::Half => (2 - row, 2 - col),
            GridTransform::MirrorHorizontal => (row, 2 - col),
            GridTransform::MirrorVertical => (2 - row, col),
            GridTransform::Transpose => (col, row),
            GridTransform::AntiTranspose => (2 - col, 2 - row),
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            GridTransform::Clockwise => GridTransform::CounterClockwise,
            GridTransform::CounterClockwise => GridTransform::Clockwise,
            other => other,
        }
    }

    pub fn apply<S: Copy>(self, grid: &FaceGrid<S>) -> FaceGrid<S> {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let (src_row, src_col) = self.source(row, col);
                grid[src_row][src_col]
            })
        })
    }
}

pub fn rotate_clockwise<S: Copy>(grid: &FaceGrid<S>) -> FaceGrid<S> {
    GridTransform::Clockwise.apply(grid)
}

pub fn rotate_counter_clockwise<S: Copy>(grid: &FaceGrid<S>) -> FaceGrid<S> {
    GridTransform::CounterClockwise.apply(grid)
}

pub fn rotate_half<S: Copy>(grid: &FaceGrid<S>) -> FaceGrid<S> {
    GridTransform::Half.apply(grid)
}

/// A full row or column of a face grid. The index must be 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    /// The three cells of the line in increasing column (for rows) or row (for
    /// columns) order.
    pub const fn cells(self) -> [(usize, usize); 3] {
        match self {
            Line::Row(row) => [(row, 0), (row, 1), (row, 2)],
            Line::Col(col) => [(0, col), (1, col), (2, col)],
        }
    }

    pub fn extract<S: Copy>(self, grid: &FaceGrid<S>) -> [S; 3] {
        self.cells().map(|(row, col)| grid[row][col])
    }

    pub fn splice<S: Copy>(self, grid: &mut FaceGrid<S>, values: [S; 3]) {
        for ((row, col), value) in self.cells().into_iter().zip(values) {
            grid[row][col] = value;
        }
    }
}
