//! Conversion of paths to line-approximable point lists.

use bezkit_math::Point3;

use crate::path::BezierPath;

/// Flatten a path into a polyline: the first waypoint position followed by
/// the uniform samples of each segment in order.
///
/// Returns an empty list for paths with fewer than 2 waypoints.
///
/// Rendering policy: for a closed path with exactly 2 waypoints the
/// wraparound segment is suppressed, since it retraces the forward segment
/// backwards. This is a display rule only; the path itself still reports
/// both segments in [`BezierPath::segment_count`].
pub fn path_to_polyline(path: &BezierPath, subdivisions: usize) -> Vec<Point3> {
    let mut count = path.segment_count();
    if count == 0 {
        return Vec::new();
    }
    if path.closed && path.waypoints.len() == 2 {
        count = 1;
    }

    let mut points = Vec::with_capacity(1 + count * subdivisions);
    points.push(path.waypoints[0].position);
    for i in 0..count {
        // i < count <= segment_count, so sampling cannot fail.
        if let Ok(samples) = path.sample_segment(i, subdivisions) {
            points.extend(samples);
        }
    }
    points
}

/// Chord-length estimate of the path length at the given sample density.
pub fn path_length(path: &BezierPath, subdivisions: usize) -> f64 {
    let points = path_to_polyline(path, subdivisions);
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).length())
        .sum()
}
