//! Validation of straight-line moves of the end-effector.
//!
//! The elbow must stay outside the inner circle of the workspace. The check
//! only looks at where the straight path meets the inner circle, it does not
//! track the elbow continuously along the path.
use crate::{Error, Point};

/// The two points where a path crosses the inner workspace circle.
pub type PathIntersections = Option<[[f64; 2]; 2]>;

/// Result of a move validation.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveCheck {
    /// Verdict of the move
    pub valid: bool,
    /// Crossing points with the inner circle
    pub intersections: PathIntersections,
}

impl MoveCheck {
    const fn valid() -> Self {
        Self { valid: true, intersections: None }
    }

    fn by_distance(from: [f64; 2], to: [f64; 2], s: [[f64; 2]; 2]) -> Self {
        Self { valid: crosses_outside(from, to, s), intersections: Some(s) }
    }

    /// Turn into `Result` type.
    pub fn into_result(self) -> Result<Self, Error> {
        if self.valid {
            Ok(self)
        } else {
            Err(Error::InvalidMove { intersections: self.intersections })
        }
    }
}

/// Check a straight move of the end-effector from `from` to `to`.
///
/// Both points should already be inside the workspace.
pub fn validate_move(l1: f64, l2: f64, from: [f64; 2], to: [f64; 2]) -> MoveCheck {
    let [x2, y2] = from;
    let [xt, yt] = to;
    let r = (l1 - l2).abs();
    let check = if xt == x2 {
        // Vertical path
        if x2.abs() > r {
            MoveCheck::valid()
        } else {
            let ys = (r * r - x2 * x2).sqrt();
            MoveCheck::by_distance(from, to, [[x2, ys], [x2, -ys]])
        }
    } else {
        let a = (yt - y2) / (xt - x2);
        let b = y2 - a * x2;
        let delta = 4. * a * a * b * b - 4. * (a * a + 1.) * (b * b - r * r);
        if delta <= 0. {
            if l1 == l2 && x2 == -xt && y2 == -yt {
                // Passing through the origin singularity
                MoveCheck { valid: false, intersections: None }
            } else {
                MoveCheck::valid()
            }
        } else {
            let sq = delta.sqrt();
            let xs1 = (-2. * a * b + sq) / (2. * (a * a + 1.));
            let xs2 = (-2. * a * b - sq) / (2. * (a * a + 1.));
            let s = [[xs1, a * xs1 + b], [xs2, a * xs2 + b]];
            MoveCheck::by_distance(from, to, s)
        }
    };
    log::info!("move {from:?} -> {to:?}: valid={}", check.valid);
    check
}

/// Distance heuristic for the segment crossing.
///
/// The move is valid if the farther of "nearest crossing to the start" and
/// "nearest crossing to the end" is longer than the move itself. This is an
/// approximation of segment membership, not an exact clipping test.
fn crosses_outside(from: [f64; 2], to: [f64; 2], [s1, s2]: [[f64; 2]; 2]) -> bool {
    let near_from = from.dist(&s1).min(from.dist(&s2));
    let near_to = to.dist(&s1).min(to.dist(&s2));
    near_from.max(near_to) > from.dist(&to)
}
