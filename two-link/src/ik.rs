//! Inverse and forward kinematics of the two-link arm.
use crate::{Direction, Error, Point};
use std::f64::consts::PI;

/// The two algebraic elbow candidates for an end-effector target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolutionPair {
    /// Candidate on the positive root
    pub a: [f64; 2],
    /// Candidate on the negative root
    pub b: [f64; 2],
}

/// Joint positions of the arm.
///
/// The shoulder is always the origin.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ArmPose {
    /// Elbow joint
    pub elbow: [f64; 2],
    /// End-effector
    pub end_effector: [f64; 2],
}

impl ArmPose {
    /// Create a new pose.
    pub const fn new(elbow: [f64; 2], end_effector: [f64; 2]) -> Self {
        Self { elbow, end_effector }
    }

    /// Check the link lengths of the pose within tolerance `tol`.
    pub fn is_consistent(&self, l1: f64, l2: f64, tol: f64) -> bool {
        (self.elbow.norm() - l1).abs() <= tol
            && (self.end_effector.dist(&self.elbow) - l2).abs() <= tol
    }
}

/// Solve the two elbow candidates by intersecting the circles around the
/// shoulder (radius `l1`) and the target (radius `l2`).
///
/// The target must not be the origin and must be strictly inside the
/// workspace, the caller is responsible for the check.
///
/// Candidate `a` has the greater y coordinate, or the greater x coordinate
/// for a target on the y-axis.
pub fn solve_elbow(l1: f64, l2: f64, x2: f64, y2: f64) -> SolutionPair {
    let target = [x2, y2];
    // The left side holds the greater y, or the greater x straight down
    let left = x2 > 0. || (x2 == 0. && y2 < 0.);
    let pair = SolutionPair {
        a: [0., 0.].pllp(l1, l2, &target, !left),
        b: [0., 0.].pllp(l1, l2, &target, left),
    };
    log::debug!("elbow candidates: a={:?}, b={:?}", pair.a, pair.b);
    pair
}

/// Turn sense of shoulder → `elbow` → `end_effector`.
///
/// The frame is moved to the elbow and rotated so the first link lies on the
/// positive x-axis, then the angle of the end-effector decides the side.
pub fn turn_of(elbow: [f64; 2], end_effector: [f64; 2]) -> Direction {
    let f1 = -elbow.angle();
    let f2 = end_effector.sub(&elbow).rotate(f1).angle();
    if 0. < f2 && f2 < PI {
        Direction::CounterClockwise
    } else {
        Direction::Clockwise
    }
}

/// Pick the candidate matching the requested direction.
///
/// Candidate `b` is returned if its turn sense matches `dir`, otherwise `a`.
pub fn select_by_direction(x2: f64, y2: f64, sol: &SolutionPair, dir: Direction) -> [f64; 2] {
    let elbow = if turn_of(sol.b, [x2, y2]) == dir { sol.b } else { sol.a };
    log::debug!("elbow selected by {dir}: {elbow:?}");
    elbow
}

/// Elbow position for a new end-effector position, used on every
/// animation step.
///
/// The law of cosines keeps the elbow on the same branch along a continuous
/// path, so it never flips between the two algebraic solutions.
pub fn forward_elbow(
    x2: f64,
    y2: f64,
    l1: f64,
    l2: f64,
    dir: Direction,
) -> Result<[f64; 2], Error> {
    let d = x2.hypot(y2);
    if d > l1 + l2 || d < (l1 - l2).abs() {
        return Err(Error::Unreachable);
    }
    let to_target = y2.atan2(x2);
    let cos = ((l1 * l1 + d * d - l2 * l2) / (2. * l1 * d)).clamp(-1., 1.);
    let offset = cos.acos();
    let a = match dir {
        Direction::CounterClockwise => to_target - offset,
        Direction::Clockwise => to_target + offset,
    };
    let elbow = <[f64; 2]>::polar(l1, a);
    // Zero distance gives NaN (l1 == l2 at the origin)
    if elbow.is_finite() {
        Ok(elbow)
    } else {
        Err(Error::Unreachable)
    }
}
