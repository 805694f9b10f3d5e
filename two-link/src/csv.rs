//! Functions for reading/writing CSV format.
use crate::{anim::Frame, ArmPose};
pub use csv::Error;
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// A flatten row of an animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct FrameRow {
    /// Step number
    pub step: usize,
    /// Elbow X
    pub elbow_x: f64,
    /// Elbow Y
    pub elbow_y: f64,
    /// End-effector X
    pub x: f64,
    /// End-effector Y
    pub y: f64,
}

impl From<&Frame> for FrameRow {
    fn from(frame: &Frame) -> Self {
        let ArmPose { elbow: [elbow_x, elbow_y], end_effector: [x, y] } = frame.pose;
        Self { step: frame.step, elbow_x, elbow_y, x, y }
    }
}

impl From<FrameRow> for Frame {
    fn from(row: FrameRow) -> Self {
        let pose = ArmPose::new([row.elbow_x, row.elbow_y], [row.x, row.y]);
        Self { step: row.step, pose }
    }
}

/// Dump the frames to CSV string, with a header.
pub fn dump_frames(frames: &[Frame]) -> Result<String, Box<dyn std::error::Error>> {
    let mut w = Writer::from_writer(Vec::new());
    frames
        .iter()
        .try_for_each(|frame| w.serialize(FrameRow::from(frame)))?;
    Ok(String::from_utf8(w.into_inner()?)?)
}

/// Parse the frames from a CSV string written by [`dump_frames`].
pub fn parse_frames(s: &str) -> Result<Vec<Frame>, Error> {
    ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(Cursor::new(s))
        .deserialize::<FrameRow>()
        .map(|row| row.map(Frame::from))
        .collect()
}
