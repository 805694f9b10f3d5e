//! Two-link planar arm library: workspace geometry, inverse kinematics,
//! straight-line move validation and motion interpolation.
//!
//! ```
//! use two_link::{Direction, TwoLink};
//!
//! let arm = TwoLink::new(5., 3., Direction::Clockwise).unwrap();
//! let pose = arm.pose([4., 3.]).unwrap();
//! assert!(pose.is_consistent(5., 3., 1e-9));
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::anim::{animate, AnimReport, Frame, Motion, NoDelay, Scheduler};
pub use crate::arm::*;
pub use crate::direction::*;
pub use crate::error::*;
pub use crate::ik::*;
pub use crate::point::*;
pub use crate::validate::*;
pub use crate::workspace::*;

pub mod anim;
mod arm;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod direction;
mod error;
mod ik;
mod point;
mod validate;
mod workspace;
#[cfg(test)]
mod tests;
