use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A point-like memory layout to achieve zero copy.
///
/// Coordinates are arm-centered: the shoulder joint is the origin and the
/// y-axis points up.
pub trait Point: Copy {
    /// Create a point from coordinates.
    fn new(x: f64, y: f64) -> Self;
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// Create a point from the polar form `(d, a)` around the origin.
    fn polar(d: f64, a: f64) -> Self {
        Self::new(d * a.cos(), d * a.sin())
    }

    /// Squared distance to the origin.
    fn norm_sq(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Distance to the origin.
    fn norm(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Distance between two points.
    fn dist(&self, rhs: &Self) -> f64 {
        (self.x() - rhs.x()).hypot(self.y() - rhs.y())
    }

    /// Vector from `rhs` to `self`.
    fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }

    /// Rotate around the origin by angle `a`.
    fn rotate(&self, a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(self.x() * c - self.y() * s, self.x() * s + self.y() * c)
    }

    /// Angle to the x-axis in `[0, 2π)`, see [`atn2`].
    fn angle(&self) -> f64 {
        atn2(self.x(), self.y())
    }

    /// Intersection of the circle around `self` (radius `d0`) and the
    /// circle around `rhs` (radius `d1`).
    ///
    /// The point is taken on the left side of `self → rhs`, or the right
    /// side if `inv` is set. A tangent radicand from rounding is taken as
    /// zero.
    fn pllp(&self, d0: f64, d1: f64, rhs: &Self, inv: bool) -> Self {
        let dx = rhs.x() - self.x();
        let dy = rhs.y() - self.y();
        let d = dx.hypot(dy);
        let a = (d0 * d0 - d1 * d1 + d * d) / (2. * d);
        let h = (d0 * d0 - a * a).max(0.).sqrt();
        let xm = self.x() + a * dx / d;
        let ym = self.y() + a * dy / d;
        if inv {
            Self::new(xm + h * dy / d, ym - h * dx / d)
        } else {
            Self::new(xm - h * dy / d, ym + h * dx / d)
        }
    }

    /// Return true if the point is exactly the origin.
    fn is_origin(&self) -> bool {
        self.x() == 0. && self.y() == 0.
    }

    /// Return true if both coordinates are finite.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl Point for [f64; 2] {
    #[inline(always)]
    fn new(x: f64, y: f64) -> Self {
        [x, y]
    }
    #[inline(always)]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline(always)]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Point for (f64, f64) {
    #[inline(always)]
    fn new(x: f64, y: f64) -> Self {
        (x, y)
    }
    #[inline(always)]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline(always)]
    fn y(&self) -> f64 {
        self.1
    }
}

/// Four-quadrant angle of `(x, y)` to the x-axis, in `[0, 2π)`.
///
/// Unlike [`f64::atan2`], the result is never negative. A near-zero `x`
/// (below `0.0001`) snaps to `π/2` for positive `y`, and `3π/2` otherwise.
pub fn atn2(x: f64, y: f64) -> f64 {
    if x.abs() < 0.0001 {
        if y > 0. {
            FRAC_PI_2
        } else {
            3. * FRAC_PI_2
        }
    } else if x > 0. && y >= 0. {
        (y / x).atan()
    } else if x > 0. {
        (y / x).atan() + TAU
    } else {
        (y / x).atan() + PI
    }
}
