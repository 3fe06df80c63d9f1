use bezkit_core::Tolerance;
use bezkit_core::traits::Validate;
use bezkit_math::{DVec3, Point3};
use bezkit_spline::polyline::{path_length, path_to_polyline};
use bezkit_spline::{BezierPath, Continuity, Waypoint, cubic};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn vec3_approx_eq(a: Point3, b: Point3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn triangle_path() -> BezierPath {
    let mut path = BezierPath::from_waypoints(vec![
        Waypoint::new(dvec3(0.0, 0.0, 0.0)),
        Waypoint::new(dvec3(1.0, 0.0, 0.0)),
        Waypoint::new(dvec3(0.5, 1.0, 0.0)),
    ]);
    path.closed = true;
    path
}

#[test]
fn test_closed_triangle_single_subdivision() {
    // One sample per segment at t = 1: each sample is the destination
    // waypoint position.
    let path = triangle_path();
    let points: Vec<_> = path.sample_all(1).collect();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], dvec3(1.0, 0.0, 0.0));
    assert_eq!(points[1], dvec3(0.5, 1.0, 0.0));
    assert_eq!(points[2], dvec3(0.0, 0.0, 0.0));
}

#[test]
fn test_single_waypoint_path_is_empty() {
    for closed in [false, true] {
        let mut path = BezierPath::new();
        path.append_waypoint().position = dvec3(3.0, 2.0, 1.0);
        path.closed = closed;

        assert_eq!(path.segment_count(), 0);
        assert_eq!(path.sample_all(16).count(), 0);
    }
}

#[test]
fn test_handle_edit_reshapes_next_sample() {
    // No cached geometry: a handle edit changes the very next sample call.
    let mut path = BezierPath::new();
    path.push(Waypoint::new(dvec3(0.0, 0.0, 0.0)));
    path.push(Waypoint::new(dvec3(0.0, 0.0, 4.0)));

    let before: Vec<_> = path.sample_all(8).collect();
    path.waypoints[0].set_handle_out(dvec3(3.0, 0.0, 0.0));
    let after: Vec<_> = path.sample_all(8).collect();

    assert_ne!(before, after);
    // Endpoint interpolation is unaffected by handle edits.
    assert_eq!(after[7], dvec3(0.0, 0.0, 4.0));
}

#[test]
fn test_connected_edit_keeps_curve_tangent_continuous() {
    let mut path = triangle_path();
    path.waypoints[1].set_handle_in(dvec3(-0.3, 0.4, 0.0));

    // Incoming tangent at the end of segment 0 and outgoing tangent at the
    // start of segment 1 must be collinear and same-signed.
    let t_in = path.segment(0).unwrap().tangent_at(1.0);
    let t_out = path.segment(1).unwrap().tangent_at(0.0);
    let cross = t_in.cross(t_out);
    assert!(cross.length() < 1e-9, "tangents not collinear: {cross:?}");
    assert!(t_in.dot(t_out) > 0.0);
}

#[test]
fn test_sample_all_traverses_waypoints_in_order() {
    let mut path = BezierPath::new();
    for x in 0..4 {
        path.append_waypoint().position = dvec3(x as f64, 0.0, 0.0);
    }

    let points: Vec<_> = path.sample_all(2).collect();
    assert_eq!(points.len(), 6);
    // Every second sample lands on a waypoint, in traversal order.
    assert!(vec3_approx_eq(points[1], dvec3(1.0, 0.0, 0.0)));
    assert!(vec3_approx_eq(points[3], dvec3(2.0, 0.0, 0.0)));
    assert!(vec3_approx_eq(points[5], dvec3(3.0, 0.0, 0.0)));
}

#[test]
fn test_connected_magnitude_preserved_across_edits() {
    let mut wp = Waypoint::new(dvec3(0.0, 0.0, 0.0));
    wp.set_handle_out(dvec3(0.0, 5.0, 0.0));
    let out_len = wp.handle_out.length();

    wp.set_handle_in(dvec3(1.0, 1.0, 1.0));
    assert!(approx_eq(wp.handle_out.length(), out_len));
    // Collinear and opposed to the edited handle.
    let cross = wp.handle_out.cross(wp.handle_in);
    assert!(cross.length() < 1e-9);
    assert!(wp.handle_out.dot(wp.handle_in) < 0.0);
}

#[test]
fn test_evaluator_against_de_casteljau() {
    // Cross-check the Bernstein form against repeated linear interpolation.
    fn lerp(a: Point3, b: Point3, t: f64) -> Point3 {
        a + (b - a) * t
    }

    let p0 = dvec3(0.0, 0.0, 0.0);
    let p1 = dvec3(1.0, 3.0, -1.0);
    let p2 = dvec3(4.0, -2.0, 2.0);
    let p3 = dvec3(5.0, 1.0, 0.0);

    for i in 0..=16 {
        let t = i as f64 / 16.0;
        let a = lerp(p0, p1, t);
        let b = lerp(p1, p2, t);
        let c = lerp(p2, p3, t);
        let expected = lerp(lerp(a, b, t), lerp(b, c, t), t);
        assert!(vec3_approx_eq(cubic::point_at(p0, p1, p2, p3, t), expected));
    }
}

#[test]
fn test_polyline_length_of_closed_triangle_exceeds_perimeter_chords() {
    let path = triangle_path();
    let chord_perimeter = 1.0 + 2.0 * (0.25_f64 + 1.0).sqrt();
    // Default handles bow the segments away from the chords.
    assert!(path_length(&path, 64) > chord_perimeter * 0.5);
    assert_eq!(path_to_polyline(&path, 4).len(), 1 + 3 * 4);
}

#[test]
fn test_serde_round_trip() {
    let mut path = triangle_path();
    path.waypoints[2].set_continuity(Continuity::Broken);
    path.waypoints[2].set_handle_out(dvec3(0.25, 0.0, 0.75));
    path.set_subdivisions_per_segment(24).unwrap();

    let json = serde_json::to_string(&path).unwrap();
    let restored: BezierPath = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.waypoints, path.waypoints);
    assert_eq!(restored.closed, path.closed);
    assert_eq!(
        restored.subdivisions_per_segment(),
        path.subdivisions_per_segment()
    );
    let a: Vec<_> = path.samples().collect();
    let b: Vec<_> = restored.samples().collect();
    assert_eq!(a, b);
}

#[test]
fn test_validate_full_path() {
    let tol = Tolerance::default_precision();
    let mut path = triangle_path();
    assert!(path.validate(&tol).is_ok());

    // Raw field write that breaks the Connected invariant.
    path.waypoints[0].handle_out = dvec3(1.0, 1.0, 0.0);
    assert!(path.validate(&tol).is_err());

    // Downgrading the mode makes the raw state legal again.
    path.waypoints[0].continuity = Continuity::Broken;
    assert!(path.validate(&tol).is_ok());
}
