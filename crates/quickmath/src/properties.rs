//! Cross-type laws that tie the modules together

use crate::{qm, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

fn assert_mat4_near(a: Mat4, b: Mat4, eps: f32) {
    let (a, b) = (a.to_cols_array(), b.to_cols_array());
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() < eps, "element {}: {} vs {}", i, a[i], b[i]);
    }
}

fn samples() -> [Vec3; 5] {
    [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-0.5, 0.25, 8.0),
        Vec3::new(100.0, -3.0, 0.001),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(7.5, 7.5, 7.5),
    ]
}

#[test]
fn test_normalize_times_length_restores_vector() {
    for v in samples() {
        let back = qm::normalize(v) * qm::length(v);
        assert!((back - v).length() < 1e-4 * v.length(), "{:?} -> {:?}", v, back);
    }

    let v4 = Vec4::new(3.0, -1.0, 2.0, 0.5);
    assert!((v4.normalize() * v4.length() - v4).length() < 1e-5);
    let v2 = Vec2::new(-6.0, 8.0);
    assert!((v2.normalize() * v2.length() - v2).length() < 1e-5);
}

#[test]
fn test_add_then_sub_is_exact_for_representable_values() {
    let a = Vec4::new(1.5, -2.25, 3.0, 0.125);
    let b = Vec4::new(0.5, 4.0, -8.0, 16.0);
    assert_eq!(a + b - b, a);

    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, -5.0, 6.5);
    assert_eq!(a + b - b, a);
}

#[test]
fn test_matrix_times_inverse_is_identity() {
    let models = [
        qm::translate(Vec3::new(3.0, 4.0, 5.0)) * qm::rotate_axis(Vec3::new(0.2, 1.0, -0.4), 47.0),
        qm::rotate_euler(Vec3::new(15.0, -60.0, 110.0)) * qm::scale(Vec3::new(0.5, 2.0, 4.0)),
        qm::lookat(Vec3::new(2.0, 3.0, 9.0), Vec3::ZERO, Vec3::Y),
        qm::perspective(70.0, 1.5, 0.1, 50.0),
    ];
    for m in models {
        assert_mat4_near(m * qm::inverse(m), Mat4::IDENTITY, 1e-4);
    }

    let m3 = qm::translate(Vec2::new(-2.0, 1.0)) * qm::rotate(33.0) * qm::scale(Vec2::new(3.0, 0.5));
    let p = m3 * qm::inverse(m3);
    for c in 0..3 {
        assert!((p[c] - Mat3::IDENTITY[c]).length() < 1e-5);
    }
}

#[test]
fn test_transpose_is_an_involution() {
    let m = qm::rotate_euler(Vec3::new(12.0, 34.0, 56.0)) * qm::translate(Vec3::ONE);
    assert_eq!(qm::transpose(qm::transpose(m)), m);
    let m3 = qm::rotate(123.0);
    assert_eq!(qm::transpose(qm::transpose(m3)), m3);
}

#[test]
fn test_slerp_endpoints() {
    let a = qm::quaternion_from_axis_angle(Vec3::X, 20.0);
    let b = qm::quaternion_from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 80.0);

    for q in [qm::slerp(a, b, 0.0), qm::slerp_shortest(a, b, 0.0)] {
        assert!((Vec4::from(q.to_array()) - Vec4::from(a.to_array())).length() < 1e-5);
    }
    for q in [qm::slerp(a, b, 1.0), qm::slerp_shortest(a, b, 1.0)] {
        assert!((Vec4::from(q.to_array()) - Vec4::from(b.to_array())).length() < 1e-5);
    }
}

#[test]
fn test_quaternion_matrix_matches_axis_angle_matrix() {
    let axis = Vec3::new(-1.0, 0.5, 2.0);
    for angle in [0.0, 30.0, 90.0, 135.0, -210.0] {
        let from_quat = qm::quaternion_to_mat4(qm::quaternion_from_axis_angle(axis, angle));
        assert_mat4_near(from_quat, qm::rotate_axis(axis, angle), 1e-5);
    }
}

#[test]
fn test_quaternion_euler_matches_matrix_euler() {
    let e = Vec3::new(25.0, -40.0, 75.0);
    let from_quat = qm::quaternion_to_mat4(qm::quaternion_from_euler(e));
    assert_mat4_near(from_quat, qm::rotate_euler(e), 1e-5);
}

#[test]
fn test_cross_of_axes() {
    assert_eq!(qm::cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(qm::cross(Vec3::Y, Vec3::X), -Vec3::Z);
}

#[test]
fn test_rotate_quarter_turn_in_plane() {
    let p = qm::rotate(90.0) * Vec3::new(1.0, 0.0, 1.0);
    assert!((p - Vec3::new(0.0, 1.0, 1.0)).length() < 1e-6);
}

#[test]
fn test_translate_origin() {
    let p = qm::translate(Vec3::new(3.0, 4.0, 5.0)) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p, Vec4::new(3.0, 4.0, 5.0, 1.0));
}

#[test]
fn test_perspective_depth_terms() {
    let (near, far) = (0.1, 100.0);
    let p = qm::perspective(90.0, 1.0, near, far);
    assert_eq!(p[2][3], -1.0);
    assert!((p[3][2] - (-2.0 * far * near / (far - near))).abs() < 1e-6);
}

#[test]
fn test_top_left_of_rotation_rotates_like_quaternion() {
    let q = qm::quaternion_from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 64.0);
    let m = qm::top_left(qm::quaternion_to_mat4(q));
    let v = Vec3::new(2.0, -1.0, 0.5);
    assert!((m * v - q.rotate_vec3(v)).length() < 1e-5);
}

#[test]
fn test_quaternion_inverse_undoes_rotation() {
    let q = Quat::from_euler(Vec3::new(10.0, 20.0, 30.0));
    let v = Vec3::new(1.0, -2.0, 3.0);
    let back = qm::inverse(q).rotate_vec3(q.rotate_vec3(v));
    assert!((back - v).length() < 1e-5);
    assert_eq!(qm::conjugate(qm::quaternion_identity()), Quat::IDENTITY);
}

#[cfg(feature = "text-io")]
#[test]
fn test_text_round_trip() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.to_string(), "1, 2, 3");
    assert_eq!(v.to_string().parse::<Vec3>(), Ok(v));

    let m = qm::lookat(Vec3::new(4.0, 5.0, 6.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(m.to_string().parse::<Mat4>(), Ok(m));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let m = qm::rotate_euler(Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(serde_json::from_str::<Mat4>(&json).unwrap(), m);

    let q = Quat::new(0.5, -0.5, 0.5, 0.5);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"x":0.5,"y":-0.5,"z":0.5,"w":0.5}"#);
    assert_eq!(serde_json::from_str::<Quat>(&json).unwrap(), q);
}
