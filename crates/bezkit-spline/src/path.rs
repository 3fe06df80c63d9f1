//! Path topology: ordered waypoints, open/closed adjacency, sampling entry
//! points.

use bezkit_core::{BezError, Result, Tolerance};
use bezkit_core::traits::{BoundingBox, Validate};
use bezkit_math::{Aabb3, Point3};
use serde::{Deserialize, Serialize};

use crate::cubic::CubicSegment;
use crate::sample::{PathSamples, SegmentSamples};
use crate::waypoint::Waypoint;

/// Sample density used when no explicit subdivision count is given.
pub const DEFAULT_SUBDIVISIONS: usize = 16;

/// An ordered sequence of [`Waypoint`]s forming a piecewise-cubic curve.
///
/// When `closed`, an implicit segment connects the last waypoint's outgoing
/// handle back to the first waypoint's incoming handle. Waypoint order is
/// semantic: it defines curve traversal order.
///
/// The path holds no derived geometry; every sample request reads the
/// current waypoint state, so handle edits need no invalidation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierPath {
    pub waypoints: Vec<Waypoint>,
    pub closed: bool,
    subdivisions_per_segment: usize,
}

impl BezierPath {
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            closed: false,
            subdivisions_per_segment: DEFAULT_SUBDIVISIONS,
        }
    }

    /// Open path over the given waypoints.
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints,
            ..Self::new()
        }
    }

    /// Number of cubic segments the current topology defines.
    ///
    /// One per waypoint pair, including the wraparound pair when closed;
    /// fewer than 2 waypoints define no segments regardless of `closed`.
    pub fn segment_count(&self) -> usize {
        let n = self.waypoints.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Ordered endpoint pair `(waypoints[i], waypoints[(i + 1) % len])` of
    /// segment `i`.
    ///
    /// The sole home of wraparound logic; all adjacency-dependent
    /// operations go through here.
    pub fn segment_endpoints(&self, i: usize) -> Result<(&Waypoint, &Waypoint)> {
        let count = self.segment_count();
        if i >= count {
            return Err(BezError::IndexOutOfRange { index: i, len: count });
        }
        let a = &self.waypoints[i];
        let b = &self.waypoints[(i + 1) % self.waypoints.len()];
        Ok((a, b))
    }

    /// Control-point snapshot of segment `i`.
    ///
    /// `p1`/`p2` are the absolute control points: the start waypoint's
    /// outgoing handle and the end waypoint's incoming handle.
    pub fn segment(&self, i: usize) -> Result<CubicSegment> {
        let (a, b) = self.segment_endpoints(i)?;
        Ok(CubicSegment::new(
            a.position,
            a.control_out(),
            b.control_in(),
            b.position,
        ))
    }

    pub fn waypoint(&self, i: usize) -> Result<&Waypoint> {
        self.waypoints.get(i).ok_or(BezError::IndexOutOfRange {
            index: i,
            len: self.waypoints.len(),
        })
    }

    pub fn waypoint_mut(&mut self, i: usize) -> Result<&mut Waypoint> {
        let len = self.waypoints.len();
        self.waypoints
            .get_mut(i)
            .ok_or(BezError::IndexOutOfRange { index: i, len })
    }

    /// Append a freshly defaulted waypoint and return it for placement.
    pub fn append_waypoint(&mut self) -> &mut Waypoint {
        self.waypoints.push(Waypoint::default());
        self.waypoints.last_mut().unwrap()
    }

    /// Prepend a freshly defaulted waypoint and return it for placement.
    pub fn prepend_waypoint(&mut self) -> &mut Waypoint {
        self.waypoints.insert(0, Waypoint::default());
        &mut self.waypoints[0]
    }

    /// Insert a freshly defaulted waypoint at `index` (`0..=len`).
    pub fn insert_waypoint(&mut self, index: usize) -> Result<&mut Waypoint> {
        if index > self.waypoints.len() {
            return Err(BezError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            });
        }
        self.waypoints.insert(index, Waypoint::default());
        Ok(&mut self.waypoints[index])
    }

    /// Append an explicit waypoint.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Insert an explicit waypoint at `index` (`0..=len`).
    pub fn insert(&mut self, index: usize, waypoint: Waypoint) -> Result<()> {
        if index > self.waypoints.len() {
            return Err(BezError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            });
        }
        self.waypoints.insert(index, waypoint);
        Ok(())
    }

    /// Remove the waypoint at `index`.
    ///
    /// Neighbouring waypoints keep their handle values; removal never
    /// re-smooths the curve.
    pub fn remove_waypoint(&mut self, index: usize) -> Result<Waypoint> {
        if index >= self.waypoints.len() {
            return Err(BezError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            });
        }
        Ok(self.waypoints.remove(index))
    }

    pub fn subdivisions_per_segment(&self) -> usize {
        self.subdivisions_per_segment
    }

    /// Set the stored sample density; must be positive.
    pub fn set_subdivisions_per_segment(&mut self, subdivisions: usize) -> Result<()> {
        if subdivisions == 0 {
            return Err(BezError::InvalidOperation(
                "subdivision count must be positive".into(),
            ));
        }
        self.subdivisions_per_segment = subdivisions;
        Ok(())
    }

    /// Sample segment `i` at `subdivisions` uniform parameter steps.
    ///
    /// Yields points at `t = k / subdivisions` for `k = 1..=subdivisions`;
    /// the segment start point is the previous sample's end (or the start
    /// waypoint position). The iterator is finite and restartable; a fresh
    /// call re-reads the current waypoint state.
    pub fn sample_segment(&self, i: usize, subdivisions: usize) -> Result<SegmentSamples> {
        Ok(SegmentSamples::new(self.segment(i)?, subdivisions))
    }

    /// Sample every segment in order at `subdivisions` steps each.
    ///
    /// Empty for paths with fewer than 2 waypoints.
    pub fn sample_all(&self, subdivisions: usize) -> PathSamples<'_> {
        PathSamples::new(self, subdivisions)
    }

    /// [`sample_all`](Self::sample_all) at the stored per-segment density.
    pub fn samples(&self) -> PathSamples<'_> {
        self.sample_all(self.subdivisions_per_segment)
    }
}

impl Default for BezierPath {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for BezierPath {
    fn validate(&self, tol: &Tolerance) -> Result<()> {
        if self.subdivisions_per_segment == 0 {
            return Err(BezError::InvalidOperation(
                "subdivision count must be positive".into(),
            ));
        }
        for wp in &self.waypoints {
            wp.validate(tol)?;
        }
        Ok(())
    }
}

impl BoundingBox for BezierPath {
    type Point = Point3;

    /// Box around the waypoint positions and the sampled curve; `None` for
    /// an empty path.
    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let positions: Vec<Point3> = self.waypoints.iter().map(|wp| wp.position).collect();
        let mut aabb = Aabb3::from_points(&positions)?;
        for p in self.samples() {
            aabb.include(p);
        }
        Some((aabb.min, aabb.max))
    }
}
