use glam::{Mat4, Vec3};
use super::*;

fn perspective_frustum(fov: f32, far: f32) -> Frustum {
    let projection = Mat4::perspective_rh(fov, 1.0, 0.1, far);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_frustum_from_identity_matrix() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    for plane in &frustum.planes {
        let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
        assert!((normal_len - 1.0).abs() < 1e-5, "plane normal should be unit length");
    }
}

#[test]
fn test_frustum_from_orthographic_projection() {
    let projection = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    for plane in &frustum.planes {
        let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
        assert!((normal_len - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }
}

// ============================================================================
// Frustum::intersects_aabb / classify_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Inside);
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_4, 100.0);
    let aabb = Aabb::new(Vec3::splat(100.0), Vec3::splat(101.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = Aabb::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));

    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 10.0);
    let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));

    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_straddling_boundary_is_partial() {
    let projection = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    // Straddles the right boundary at x=5
    let aabb = Aabb::new(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Partial);
}

// ============================================================================
// Spheres and points
// ============================================================================

#[test]
fn test_sphere_against_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);

    assert!(frustum.intersects_sphere(&BoundingSphere::new(Vec3::ZERO, 1.0)));
    assert!(!frustum.intersects_sphere(&BoundingSphere::new(Vec3::new(0.0, 0.0, 20.0), 1.0)));
    // Center behind the camera, radius reaches past the near plane
    assert!(frustum.intersects_sphere(&BoundingSphere::new(Vec3::new(0.0, 0.0, 5.5), 1.0)));
}

#[test]
fn test_contains_point() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 50.0)));
}

#[test]
fn test_query_shape_impls_match_inherent_tests() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let sphere = BoundingSphere::new(Vec3::new(200.0, 0.0, 0.0), 1.0);

    assert_eq!(QueryShape::<Aabb>::overlaps(&frustum, &aabb), frustum.intersects_aabb(&aabb));
    assert_eq!(
        QueryShape::<BoundingSphere>::overlaps(&frustum, &sphere),
        frustum.intersects_sphere(&sphere),
    );
    assert!(QueryShape::<Aabb>::encloses_point(&frustum, &Vec3::ZERO));
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
