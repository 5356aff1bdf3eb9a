//! The candidate family: named fields plus index operators.
//!
//! Vectors index their components in axis order (`0` is `x`), matrices take a
//! `(row, col)` pair. Indexing outside the valid range is a caller bug and
//! panics.

use std::ops::Index;

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

/// 4x4 matrix, `mRC` is the entry at 1-based row `R` and column `C`
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m14: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m24: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
    pub m34: f32,
    pub m41: f32,
    pub m42: f32,
    pub m43: f32,
    pub m44: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn unit_x() -> Self {
        Self::new(1., 0.)
    }

    pub fn unit_y() -> Self {
        Self::new(0., 1.)
    }
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn unit_x() -> Self {
        Self::new(1., 0., 0.)
    }

    pub fn unit_y() -> Self {
        Self::new(0., 1., 0.)
    }

    pub fn unit_z() -> Self {
        Self::new(0., 0., 1.)
    }
}

impl Vector4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn unit_w() -> Self {
        Self::new(0., 0., 0., 1.)
    }
}

impl Matrix {
    /// Create a matrix from its rows
    #[rustfmt::skip]
    pub fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self {
            m11: r[0][0], m12: r[0][1], m13: r[0][2], m14: r[0][3],
            m21: r[1][0], m22: r[1][1], m23: r[1][2], m24: r[1][3],
            m31: r[2][0], m32: r[2][1], m33: r[2][2], m34: r[2][3],
            m41: r[3][0], m42: r[3][1], m43: r[3][2], m44: r[3][3],
        }
    }

    pub fn identity() -> Self {
        Self {
            m11: 1.,
            m22: 1.,
            m33: 1.,
            m44: 1.,
            ..Self::default()
        }
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Indices for Vector2 run from 0 to 1, inclusive."),
        }
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Indices for Vector3 run from 0 to 2, inclusive."),
        }
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Indices for Vector4 run from 0 to 3, inclusive."),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        match (row, col) {
            (0, 0) => &self.m11,
            (0, 1) => &self.m12,
            (0, 2) => &self.m13,
            (0, 3) => &self.m14,
            (1, 0) => &self.m21,
            (1, 1) => &self.m22,
            (1, 2) => &self.m23,
            (1, 3) => &self.m24,
            (2, 0) => &self.m31,
            (2, 1) => &self.m32,
            (2, 2) => &self.m33,
            (2, 3) => &self.m34,
            (3, 0) => &self.m41,
            (3, 1) => &self.m42,
            (3, 2) => &self.m43,
            (3, 3) => &self.m44,
            _ => panic!("Rows and columns for matrices run from 0 to 3, inclusive."),
        }
    }
}
