use crate::PathIntersections;

/// Errors of the two-link arm.
///
/// All of them are recoverable: the caller is expected to ask for new
/// values, skip a frame, or stop the arm at its last valid pose.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Link length is zero, negative or not a number
    NonPositiveLength,
    /// The arm does not fit in the drawing area
    ExceedArea {
        /// Total reach `l1 + l2`
        reach: f64,
        /// Width of the area
        width: f64,
        /// Height of the area
        height: f64,
    },
    /// The target is the shoulder joint itself
    DegenerateTarget,
    /// The target is outside of the workspace annulus
    OutsideWorkspace,
    /// The end-effector cannot reach the point
    Unreachable,
    /// The straight path crosses the inner forbidden region
    InvalidMove {
        /// Crossing points on the inner circle, if any
        intersections: PathIntersections,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NonPositiveLength => write!(f, "link length must be greater than 0"),
            Self::ExceedArea { reach, width, height } => {
                write!(f, "arm reach {reach} exceeds the area {width}x{height}")
            }
            Self::DegenerateTarget => write!(f, "target cannot be the origin (0, 0)"),
            Self::OutsideWorkspace => write!(f, "target is outside of the workspace"),
            Self::Unreachable => write!(f, "point is unreachable"),
            Self::InvalidMove { intersections: Some([[x1, y1], [x2, y2]]) } => write!(
                f,
                "move crosses the inner circle at ({x1:.4}, {y1:.4}) and ({x2:.4}, {y2:.4})"
            ),
            Self::InvalidMove { intersections: None } => write!(f, "move crosses the origin"),
        }
    }
}

impl std::error::Error for Error {}
