//! The reference family: plain letter-named fields, matrices read with `get(row, col)`.

/// 2D vector
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// 3D vector
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 4D vector
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// 4x4 matrix stored as rows
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub m: [[f32; 4]; 4],
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl Vector4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl Matrix {
    /// Create a matrix from its rows
    pub fn new(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        let mut m = [[0.; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.;
        }
        Self { m }
    }

    /// The entry at `row`, `col` (both 0-based)
    ///
    /// # Panics
    ///
    /// Panics if either index is greater than 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }
}
