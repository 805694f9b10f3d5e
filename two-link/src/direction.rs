/// Turn sense of the elbow, resolves the two inverse kinematics solutions.
///
/// The sense is measured on the turn shoulder → elbow → end-effector.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Direction {
    /// Counterclockwise (left) turn
    #[default]
    CounterClockwise = 0,
    /// Clockwise (right) turn
    Clockwise = 1,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CounterClockwise => write!(f, "Counterclockwise"),
            Self::Clockwise => write!(f, "Clockwise"),
        }
    }
}

/// Error for direction conversion.
#[derive(Debug)]
pub struct DirectionError;

impl std::fmt::Display for DirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid direction, expect cw or ccw")
    }
}

impl std::error::Error for DirectionError {}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::CounterClockwise),
            1 => Ok(Self::Clockwise),
            _ => Err(DirectionError),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ccw" | "counterclockwise" | "0" => Ok(Self::CounterClockwise),
            "cw" | "clockwise" | "1" => Ok(Self::Clockwise),
            _ => Err(DirectionError),
        }
    }
}

impl Direction {
    /// The opposite direction.
    pub fn rev(&self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}
