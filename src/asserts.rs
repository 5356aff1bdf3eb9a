//! Component-wise comparison of reference and candidate aggregates.
//!
//! The `check_*` functions hand every out-of-tolerance component to a
//! [`Reporter`]. The `assert_*_eq` functions are what tests call: they print
//! each offending component as soon as it is found and panic after the whole
//! aggregate has been checked.

use std::error::Error;
use std::fmt::{self, Display};
use std::panic::Location;

use yansi::Paint;

use crate::approx_eq::{ApproxEq, ZERO_TOLERANCE};
use common::structs::{candidate, reference};

/// A single scalar inside an aggregate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
    Z,
    W,
    /// Matrix entry, 0-based
    Entry { row: usize, col: usize },
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
            Self::Z => f.write_str("z"),
            Self::W => f.write_str("w"),
            Self::Entry { row, col } => write!(f, "({row}, {col})"),
        }
    }
}

/// One component whose reference and candidate values differ by more than
/// [`ZERO_TOLERANCE`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ToleranceExceeded {
    pub component: Component,
    pub reference: f32,
    pub candidate: f32,
}

impl ToleranceExceeded {
    /// The absolute difference between the two values
    pub fn difference(&self) -> f32 {
        (self.reference - self.candidate).abs()
    }
}

impl Display for ToleranceExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component {}: reference {} vs candidate {}, difference {} exceeds {}",
            self.component,
            self.reference,
            self.candidate,
            self.difference(),
            ZERO_TOLERANCE
        )
    }
}

impl Error for ToleranceExceeded {}

/// Receives every component that failed the tolerance check
pub trait Reporter {
    fn report(&mut self, failure: ToleranceExceeded);
}

impl Reporter for Vec<ToleranceExceeded> {
    fn report(&mut self, failure: ToleranceExceeded) {
        self.push(failure);
    }
}

/// Writes failures to stderr as they arrive and remembers how many there were.
struct StderrReporter {
    location: &'static Location<'static>,
    failures: usize,
}

impl StderrReporter {
    fn new(location: &'static Location<'static>) -> Self {
        Self {
            location,
            failures: 0,
        }
    }

    #[track_caller]
    fn finish(self, what: &str) {
        if self.failures > 0 {
            panic!(
                "{what} mismatch at {}: {} component(s) out of tolerance",
                self.location, self.failures
            );
        }
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, failure: ToleranceExceeded) {
        self.failures += 1;
        eprintln!(
            "{} {}: {}",
            Paint::red("tolerance exceeded").bold(),
            self.location,
            failure
        );
    }
}

fn check_components<const N: usize>(
    components: [Component; N],
    reference: [f32; N],
    candidate: [f32; N],
    reporter: &mut impl Reporter,
) {
    for ((component, r), c) in components.into_iter().zip(reference).zip(candidate) {
        if !r.approx_eq(c) {
            reporter.report(ToleranceExceeded {
                component,
                reference: r,
                candidate: c,
            });
        }
    }
}

const XY: [Component; 2] = [Component::X, Component::Y];
const XYZ: [Component; 3] = [Component::X, Component::Y, Component::Z];
const XYZW: [Component; 4] = [Component::X, Component::Y, Component::Z, Component::W];

pub fn check_vector2(
    reference: &reference::Vector2,
    candidate: &candidate::Vector2,
    reporter: &mut impl Reporter,
) {
    check_components(
        XY,
        [reference.x, reference.y],
        [candidate.x, candidate.y],
        reporter,
    );
}

pub fn check_vector3(
    reference: &reference::Vector3,
    candidate: &candidate::Vector3,
    reporter: &mut impl Reporter,
) {
    check_components(
        XYZ,
        [reference.x, reference.y, reference.z],
        [candidate.x, candidate.y, candidate.z],
        reporter,
    );
}

pub fn check_vector4(
    reference: &reference::Vector4,
    candidate: &candidate::Vector4,
    reporter: &mut impl Reporter,
) {
    check_components(
        XYZW,
        [reference.x, reference.y, reference.z, reference.w],
        [candidate.x, candidate.y, candidate.z, candidate.w],
        reporter,
    );
}

/// Entries are visited row by row, so failures come out in row-major order.
pub fn check_matrix(
    reference: &reference::Matrix,
    candidate: &candidate::Matrix,
    reporter: &mut impl Reporter,
) {
    for row in 0..4 {
        for col in 0..4 {
            let r = reference.get(row, col);
            let c = candidate[(row, col)];
            if !r.approx_eq(c) {
                reporter.report(ToleranceExceeded {
                    component: Component::Entry { row, col },
                    reference: r,
                    candidate: c,
                });
            }
        }
    }
}

/// Assert that two 2D vectors agree on both axes
///
/// # Panics
///
/// Panics after printing every axis that is out of tolerance.
#[track_caller]
pub fn assert_vector2_eq(reference: &reference::Vector2, candidate: &candidate::Vector2) {
    let mut reporter = StderrReporter::new(Location::caller());
    check_vector2(reference, candidate, &mut reporter);
    reporter.finish("Vector2");
}

/// Same as [`assert_vector2_eq`] for 3D vectors
#[track_caller]
pub fn assert_vector3_eq(reference: &reference::Vector3, candidate: &candidate::Vector3) {
    let mut reporter = StderrReporter::new(Location::caller());
    check_vector3(reference, candidate, &mut reporter);
    reporter.finish("Vector3");
}

/// Same as [`assert_vector2_eq`] for 4D vectors
#[track_caller]
pub fn assert_vector4_eq(reference: &reference::Vector4, candidate: &candidate::Vector4) {
    let mut reporter = StderrReporter::new(Location::caller());
    check_vector4(reference, candidate, &mut reporter);
    reporter.finish("Vector4");
}

/// Assert that all sixteen entries of two matrices agree
///
/// # Panics
///
/// Panics after printing every entry that is out of tolerance.
#[track_caller]
pub fn assert_matrix_eq(reference: &reference::Matrix, candidate: &candidate::Matrix) {
    let mut reporter = StderrReporter::new(Location::caller());
    check_matrix(reference, candidate, &mut reporter);
    reporter.finish("Matrix");
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn vector2_within_tolerance() {
        let mut failures = Vec::new();
        check_vector2(
            &reference::Vector2::new(1., 2.),
            &candidate::Vector2::new(1.0000001, 2.),
            &mut failures,
        );
        assert!(failures.is_empty());
    }

    #[test]
    fn vector2_fails_on_x_only() {
        let mut failures = Vec::new();
        check_vector2(
            &reference::Vector2::new(1., 2.),
            &candidate::Vector2::new(1.1, 2.),
            &mut failures,
        );
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].component, Component::X);
        assert_approx_eq!(failures[0].difference(), 0.1, 1e-6);
    }

    #[test]
    fn vector4_reports_every_axis() {
        let mut failures = Vec::new();
        check_vector4(
            &reference::Vector4::zero(),
            &candidate::Vector4::new(1., 0., 1., 1.),
            &mut failures,
        );
        let components: Vec<_> = failures.iter().map(|f| f.component).collect();
        assert_eq!(components, [Component::X, Component::Z, Component::W]);
    }

    #[test]
    fn matrix_failures_in_row_major_order() {
        let mut rows = [[0.; 4]; 4];
        rows[3][0] = 1.;
        rows[0][2] = 1.;
        let mut failures = Vec::new();
        check_matrix(
            &reference::Matrix::default(),
            &candidate::Matrix::from_rows(rows),
            &mut failures,
        );
        let components: Vec<_> = failures.iter().map(|f| f.component).collect();
        assert_eq!(
            components,
            [
                Component::Entry { row: 0, col: 2 },
                Component::Entry { row: 3, col: 0 }
            ]
        );
    }

    #[test]
    fn display() {
        let failure = ToleranceExceeded {
            component: Component::Entry { row: 2, col: 3 },
            reference: 5.,
            candidate: 6.,
        };
        let text = failure.to_string();
        assert!(text.starts_with("component (2, 3): reference 5 vs candidate 6"));
        assert_eq!(Component::W.to_string(), "w");
    }

    #[test]
    fn assert_passes_silently() {
        assert_vector3_eq(&reference::Vector3::zero(), &candidate::Vector3::zero());
        assert_matrix_eq(&reference::Matrix::identity(), &candidate::Matrix::identity());
    }

    #[test]
    #[should_panic(expected = "Vector2 mismatch")]
    fn assert_panics_on_mismatch() {
        assert_vector2_eq(
            &reference::Vector2::new(1., 2.),
            &candidate::Vector2::new(1.1, 2.),
        );
    }

    #[test]
    #[should_panic(expected = "2 component(s) out of tolerance")]
    fn assert_checks_all_components_before_failing() {
        assert_vector3_eq(
            &reference::Vector3::new(1., 0., 1.),
            &candidate::Vector3::zero(),
        );
    }
}
