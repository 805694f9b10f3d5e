use serde::Deserialize;
use std::{path::Path, time::Duration};
use two_link::{anim, Direction, TwoLink};

/// Drawing area of the front end, 80% of a 1920x1080 screen.
pub(crate) const AREA: [f64; 2] = [1536., 864.];

const fn area() -> [f64; 2] {
    AREA
}

const fn steps() -> usize {
    anim::STEPS
}

const fn delay() -> u64 {
    anim::DELAY.as_millis() as u64
}

const fn pause() -> u64 {
    anim::PAUSE.as_millis() as u64
}

enum SessionErr {
    // Reading file error
    Io(std::io::Error),
    // Deserialization error
    RonSer(ron::error::SpannedError),
}

impl std::fmt::Display for SessionErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading file error: {e}"),
            Self::RonSer(e) => write!(f, "ron deserialization error: {e}"),
        }
    }
}

impl std::fmt::Debug for SessionErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for SessionErr {}

/// A session of the arm, stored in RON format.
///
/// ```ron
/// (l1: 150.0, l2: 90.0, dir: Clockwise, start: (200.0, 40.0), target: (-120.0, 160.0))
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct Session {
    pub(crate) l1: f64,
    pub(crate) l2: f64,
    #[serde(default)]
    pub(crate) dir: Direction,
    /// Initial end-effector position
    pub(crate) start: [f64; 2],
    /// Target of the straight move
    pub(crate) target: [f64; 2],
    /// Drawing area `[width, height]`
    #[serde(default = "area")]
    pub(crate) area: [f64; 2],
    /// Number of animation steps
    #[serde(default = "steps")]
    pub(crate) steps: usize,
    /// Delay of each step in milliseconds
    #[serde(default = "delay")]
    pub(crate) delay: u64,
    /// Pause before the animation in milliseconds
    #[serde(default = "pause")]
    pub(crate) pause: u64,
}

impl Session {
    pub(crate) fn from_ron(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(ron::from_str(s).map_err(SessionErr::RonSer)?)
    }

    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let s = std::fs::read_to_string(path).map_err(SessionErr::Io)?;
        Self::from_ron(&s)
    }

    /// Build the arm, the arm must fit in the drawing area.
    pub(crate) fn arm(&self) -> Result<TwoLink, two_link::Error> {
        let arm = TwoLink::new(self.l1, self.l2, self.dir)?;
        let [w, h] = self.area;
        arm.check_area(w, h)?;
        Ok(arm)
    }

    pub(crate) fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    pub(crate) fn pause(&self) -> Duration {
        Duration::from_millis(self.pause)
    }
}
