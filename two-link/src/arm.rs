use crate::*;

/// Two-link planar arm with a fixed turn sense.
///
/// # Parameters
///
/// + Shoulder to elbow link `l1`
/// + Elbow to end-effector link `l2`
/// + Turn sense of the elbow `dir`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoLink {
    /// Link lengths
    pub len: LinkLengths,
    /// Turn sense
    pub dir: Direction,
}

impl TwoLink {
    /// Create a new arm, the lengths must be positive.
    pub fn new(l1: f64, l2: f64, dir: Direction) -> Result<Self, Error> {
        Ok(Self { len: LinkLengths::new(l1, l2)?, dir })
    }

    /// Check the drawing area before any solving.
    pub fn check_area(&self, width: f64, height: f64) -> Result<(), Error> {
        self.len.fits(width, height)
    }

    /// Workspace bounds of the arm.
    pub fn bounds(&self) -> WorkspaceBounds {
        self.len.bounds()
    }

    /// Check if `p` is strictly inside the workspace.
    pub fn contains(&self, p: [f64; 2]) -> bool {
        self.len.contains(p)
    }

    fn check_target(&self, p: [f64; 2]) -> Result<(), Error> {
        if p.is_origin() {
            Err(Error::DegenerateTarget)
        } else if !self.contains(p) {
            Err(Error::OutsideWorkspace)
        } else {
            Ok(())
        }
    }

    /// Solve the pose of an end-effector target.
    pub fn pose(&self, target: [f64; 2]) -> Result<ArmPose, Error> {
        self.check_target(target)?;
        let LinkLengths { l1, l2 } = self.len;
        let [x2, y2] = target;
        let sol = solve_elbow(l1, l2, x2, y2);
        let elbow = select_by_direction(x2, y2, &sol, self.dir);
        Ok(ArmPose::new(elbow, target))
    }

    /// Both elbow candidates of a target.
    pub fn candidates(&self, target: [f64; 2]) -> Result<SolutionPair, Error> {
        self.check_target(target)?;
        let [x2, y2] = target;
        Ok(solve_elbow(self.len.l1, self.len.l2, x2, y2))
    }

    /// Validate a straight move from the current pose to `target`.
    pub fn plan_move(&self, pose: &ArmPose, target: [f64; 2]) -> Result<MoveCheck, Error> {
        if !self.contains(target) {
            return Err(Error::OutsideWorkspace);
        }
        let LinkLengths { l1, l2 } = self.len;
        validate_move(l1, l2, pose.end_effector, target).into_result()
    }

    /// Motion from the current pose to `target`.
    pub fn motion(&self, pose: &ArmPose, target: [f64; 2], steps: usize) -> Motion {
        Motion::new(self.len, self.dir, pose.end_effector, target, steps)
    }
}
