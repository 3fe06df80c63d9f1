//! Fixed-count sampling iterators over segments and whole paths.
//!
//! Both iterators are lazy, finite, and restartable: constructing one takes
//! a snapshot (`SegmentSamples`) or an immutable borrow (`PathSamples`) and
//! a fresh construction re-reads the current waypoint state. Yielded points
//! are deterministic for identical state.

use bezkit_math::Point3;

use crate::cubic::CubicSegment;
use crate::path::BezierPath;

/// Iterator over the uniform samples of a single cubic segment.
///
/// Yields `subdivisions` points at `t = k / subdivisions` for
/// `k = 1..=subdivisions`. The segment start point (`t = 0`) is not
/// yielded; it is the previous sample's end, or the start waypoint
/// position.
#[derive(Debug, Clone)]
pub struct SegmentSamples {
    segment: CubicSegment,
    subdivisions: usize,
    k: usize,
}

impl SegmentSamples {
    pub fn new(segment: CubicSegment, subdivisions: usize) -> Self {
        Self {
            segment,
            subdivisions,
            k: 0,
        }
    }
}

impl Iterator for SegmentSamples {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.k >= self.subdivisions {
            return None;
        }
        self.k += 1;
        let t = self.k as f64 / self.subdivisions as f64;
        Some(self.segment.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.subdivisions - self.k;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSamples {}

/// Iterator chaining [`SegmentSamples`] over every segment of a path in
/// order.
///
/// Empty for paths with fewer than 2 waypoints.
#[derive(Debug, Clone)]
pub struct PathSamples<'a> {
    path: &'a BezierPath,
    subdivisions: usize,
    next_segment: usize,
    inner: Option<SegmentSamples>,
}

impl<'a> PathSamples<'a> {
    pub fn new(path: &'a BezierPath, subdivisions: usize) -> Self {
        Self {
            path,
            subdivisions,
            next_segment: 0,
            inner: None,
        }
    }
}

impl Iterator for PathSamples<'_> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(p) = inner.next() {
                    return Some(p);
                }
                self.inner = None;
            }

            if self.next_segment >= self.path.segment_count() {
                return None;
            }
            let segment = self.path.segment(self.next_segment).ok()?;
            self.next_segment += 1;
            self.inner = Some(SegmentSamples::new(segment, self.subdivisions));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self
            .path
            .segment_count()
            .saturating_sub(self.next_segment)
            * self.subdivisions;
        let remaining = pending + self.inner.as_ref().map_or(0, ExactSizeIterator::len);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSamples<'_> {}
