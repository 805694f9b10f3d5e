//! Workspace geometry of the two-link arm.
use crate::{Error, Point};

/// Reachable annulus of the end-effector.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkspaceBounds {
    /// Outer radius `l1 + l2`
    pub outer_radius: f64,
    /// Inner radius `|l1 - l2|`
    pub inner_radius: f64,
}

impl WorkspaceBounds {
    /// Derive from the link lengths.
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { outer_radius: l1 + l2, inner_radius: (l1 - l2).abs() }
    }

    /// Return true if `p` lies strictly between the two circles.
    ///
    /// Points exactly on either circle are rejected.
    pub fn contains<P: Point>(&self, p: P) -> bool {
        let r2 = p.norm_sq();
        self.inner_radius * self.inner_radius < r2 && r2 < self.outer_radius * self.outer_radius
    }
}

/// Compute the workspace radius from the link lengths.
pub fn compute_bounds(l1: f64, l2: f64) -> WorkspaceBounds {
    WorkspaceBounds::new(l1, l2)
}

/// Check if `(x, y)` is strictly inside the workspace.
pub fn is_inside_workspace(l1: f64, l2: f64, x: f64, y: f64) -> bool {
    WorkspaceBounds::new(l1, l2).contains([x, y])
}

/// Check if the arm fits in a drawing area of `width` x `height`.
///
/// The shoulder sits at the center of the area.
pub fn fits_in_area(l1: f64, l2: f64, width: f64, height: f64) -> bool {
    let reach = l1 + l2;
    reach <= width / 2. && reach <= height / 2.
}

/// Link lengths of the arm.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkLengths {
    /// Length of the first link (shoulder to elbow)
    pub l1: f64,
    /// Length of the second link (elbow to end-effector)
    pub l2: f64,
}

impl LinkLengths {
    /// Create with validation, both lengths must be positive.
    pub fn new(l1: f64, l2: f64) -> Result<Self, Error> {
        let valid = |l: f64| l.is_finite() && l > 0.;
        if valid(l1) && valid(l2) {
            Ok(Self { l1, l2 })
        } else {
            Err(Error::NonPositiveLength)
        }
    }

    /// Workspace bounds of the lengths.
    pub fn bounds(&self) -> WorkspaceBounds {
        WorkspaceBounds::new(self.l1, self.l2)
    }

    /// Return true if `p` is strictly inside the workspace.
    pub fn contains<P: Point>(&self, p: P) -> bool {
        self.bounds().contains(p)
    }

    /// Check the placement constraint of the drawing area.
    pub fn fits(&self, width: f64, height: f64) -> Result<(), Error> {
        if fits_in_area(self.l1, self.l2, width, height) {
            Ok(())
        } else {
            Err(Error::ExceedArea { reach: self.l1 + self.l2, width, height })
        }
    }
}
