//! Motion interpolation and the animation driver.
//!
//! The driver never sleeps by itself, waiting is delegated to a
//! [`Scheduler`] owned by the caller.
use crate::{forward_elbow, ArmPose, Direction, LinkLengths};
use std::time::Duration;

/// Default number of animation steps.
pub const STEPS: usize = 300;
/// Default delay between two steps.
pub const DELAY: Duration = Duration::from_millis(10);
/// Default pause before the animation starts.
pub const PAUSE: Duration = Duration::from_millis(2000);

/// A single animation frame.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Step number, starts from 1
    pub step: usize,
    /// Pose of the step
    pub pose: ArmPose,
}

/// Straight-line motion of the end-effector.
///
/// Yields one [`Frame`] per step and stops at the first unreachable step,
/// so the last yielded pose is the last valid one.
#[derive(Clone, Debug)]
pub struct Motion {
    len: LinkLengths,
    dir: Direction,
    start: [f64; 2],
    delta: [f64; 2],
    step: usize,
    steps: usize,
}

impl Motion {
    /// Create a motion from `start` to `target` in `steps` equal increments.
    pub fn new(
        len: LinkLengths,
        dir: Direction,
        start: [f64; 2],
        target: [f64; 2],
        steps: usize,
    ) -> Self {
        let n = steps.max(1) as f64;
        let delta = [(target[0] - start[0]) / n, (target[1] - start[1]) / n];
        Self { len, dir, start, delta, step: 0, steps }
    }

    /// Total number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn end_effector(&self, step: usize) -> [f64; 2] {
        let n = step as f64;
        [self.start[0] + n * self.delta[0], self.start[1] + n * self.delta[1]]
    }
}

impl Iterator for Motion {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        let step = self.step + 1;
        let p = self.end_effector(step);
        let LinkLengths { l1, l2 } = self.len;
        match forward_elbow(p[0], p[1], l1, l2, self.dir) {
            Ok(elbow) => {
                self.step = step;
                log::trace!("step {step}: elbow={elbow:?}, end={p:?}");
                Some(Frame { step, pose: ArmPose::new(elbow, p) })
            }
            Err(e) => {
                log::warn!("motion stopped at step {step}: {e}");
                self.step = self.steps;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.steps - self.step))
    }
}

/// Timer abstraction of the animation.
pub trait Scheduler {
    /// Wait for `delay` before the next step.
    fn wait(&mut self, delay: Duration);
}

/// A scheduler without any delay, plays the animation immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Scheduler for NoDelay {
    fn wait(&mut self, _delay: Duration) {}
}

impl<F: FnMut(Duration)> Scheduler for F {
    fn wait(&mut self, delay: Duration) {
        self(delay);
    }
}

/// Summary of a played animation.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimReport {
    /// Last valid pose
    pub last: ArmPose,
    /// Number of played frames
    pub frames: usize,
    /// All steps are played
    pub finished: bool,
    /// Stopped by the callback
    pub cancelled: bool,
}

/// Play the motion from the `init` pose.
///
/// The `callback` is called on every frame, return `false` to cancel the
/// animation at that step boundary.
pub fn animate<S, C>(
    init: ArmPose,
    motion: Motion,
    delay: Duration,
    scheduler: &mut S,
    mut callback: C,
) -> AnimReport
where
    S: Scheduler + ?Sized,
    C: FnMut(&Frame) -> bool,
{
    let steps = motion.steps();
    let mut report = AnimReport { last: init, frames: 0, finished: false, cancelled: false };
    for frame in motion {
        report.last = frame.pose;
        report.frames = frame.step;
        if !callback(&frame) {
            report.cancelled = true;
            return report;
        }
        if frame.step < steps {
            scheduler.wait(delay);
        }
    }
    report.finished = report.frames == steps;
    report
}
