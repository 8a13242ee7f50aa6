use satrelay_lib::{line_of_sight, Error, Vec3, EARTH_RADIUS_KM};

#[test]
fn segment_clear_of_sphere_is_visible() {
    // both points well outside a unit sphere, segment passes nowhere near it
    let a = Vec3::new(5.0, 5.0, 0.0);
    let b = Vec3::new(-5.0, 5.0, 0.0);

    assert!(line_of_sight(&a, &b, 1.0).expect("non-degenerate"));
}

#[test]
fn segment_through_sphere_centre_is_occluded() {
    let a = Vec3::new(-2.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);

    assert!(!line_of_sight(&a, &b, 1.0).expect("non-degenerate"));
}

#[test]
fn midpoint_inside_sphere_is_occluded() {
    // midpoint (0, 0.5, 0) lies strictly inside the unit sphere
    let a = Vec3::new(-3.0, 0.5, 0.0);
    let b = Vec3::new(3.0, 0.5, 0.0);

    assert!(!line_of_sight(&a, &b, 1.0).expect("non-degenerate"));
}

#[test]
fn tangent_segment_terminates_and_is_visible() {
    // the segment grazes the unit sphere at (0, 1, 0) where the surface
    // distance reaches exactly zero; the step floor must keep the march moving
    let a = Vec3::new(-2.0, 1.0, 0.0);
    let b = Vec3::new(2.0, 1.0, 0.0);

    assert!(line_of_sight(&a, &b, 1.0).expect("non-degenerate"));
}

#[test]
fn coincident_points_are_rejected() {
    let a = Vec3::new(1.0, 2.0, 3.0);

    let err = line_of_sight(&a, &a, 1.0).unwrap_err();
    assert!(matches!(err, Error::ZeroLengthVector));
}

#[test]
fn low_orbit_pair_across_the_planet_is_occluded() {
    let a = Vec3::from_lat_lon(0.0, 0.0, EARTH_RADIUS_KM, 400.0);
    let b = Vec3::from_lat_lon(0.0, 180.0, EARTH_RADIUS_KM, 400.0);

    assert!(!line_of_sight(&a, &b, EARTH_RADIUS_KM).expect("non-degenerate"));
}

#[test]
fn high_orbit_pair_over_the_horizon_is_visible() {
    let a = Vec3::from_lat_lon(0.0, 0.0, EARTH_RADIUS_KM, 10000.0);
    let b = Vec3::from_lat_lon(0.0, 60.0, EARTH_RADIUS_KM, 10000.0);

    assert!(line_of_sight(&a, &b, EARTH_RADIUS_KM).expect("non-degenerate"));
}
