//! BezKit spline model: editable piecewise-cubic Bezier paths.
//!
//! A [`BezierPath`] is an ordered sequence of [`Waypoint`]s, each carrying
//! two control-handle offsets coupled by a [`Continuity`] mode. Segments
//! between consecutive waypoints are cubic Bezier curves, evaluated by
//! [`cubic`] and sampled by fixed-count uniform subdivision.

pub mod cubic;
pub mod path;
pub mod polyline;
pub mod sample;
pub mod waypoint;

pub use cubic::CubicSegment;
pub use path::BezierPath;
pub use sample::{PathSamples, SegmentSamples};
pub use waypoint::{Continuity, Waypoint};
