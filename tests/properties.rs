use approx::abs_diff_eq;
use impact_vector::{
    FlatComponents, Quaternion, Vector2, Vector3, Vector4,
    buffer::{pack, unpack},
};
use proptest::prelude::*;
use std::f32::consts::{PI, TAU};

prop_compose! {
    fn vector2_strategy(max: f32)(
        x in -max..max,
        y in -max..max,
    ) -> Vector2 {
        Vector2::new(x, y)
    }
}

prop_compose! {
    fn vector3_strategy(max: f32)(
        x in -max..max,
        y in -max..max,
        z in -max..max,
    ) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

prop_compose! {
    fn unit_vector3_strategy()(
        polar_angle in 0.0..PI,
        azimuthal_angle in 0.0..TAU,
    ) -> Vector3 {
        Vector3::from_spherical(1.0, polar_angle, azimuthal_angle)
    }
}

prop_compose! {
    fn rotation_strategy()(
        axis in unit_vector3_strategy(),
        angle in -TAU..TAU,
    ) -> Quaternion {
        Quaternion::from_axis_angle(&axis, angle)
    }
}

fn same_rotation(a: &Quaternion, b: &Quaternion, epsilon: f32) -> bool {
    abs_diff_eq!(a, b, epsilon = epsilon) || abs_diff_eq!(a, &b.negated(), epsilon = epsilon)
}

proptest! {
    #[test]
    fn normalized_vector3_has_unit_norm(v in vector3_strategy(1e3)) {
        prop_assume!(v.norm() > 1e-3);
        prop_assert!(abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = 1e-5));
    }

    #[test]
    fn normalized_vector2_has_unit_norm_or_is_zero(v in vector2_strategy(1e3)) {
        let normalized = v.normalized();
        if v.norm() < 1e-6 {
            prop_assert_eq!(normalized, Vector2::ZERO);
        } else {
            prop_assert!(abs_diff_eq!(normalized.norm(), 1.0, epsilon = 1e-5));
        }
    }

    #[test]
    fn cross_product_is_orthogonal_to_both_factors(
        a in vector3_strategy(10.0),
        b in vector3_strategy(10.0),
    ) {
        let c = a.cross(&b);
        let scale = a.norm() * b.norm() * (a.norm() + b.norm()) + 1.0;
        prop_assert!(abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-5 * scale));
        prop_assert!(abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-5 * scale));
    }

    #[test]
    fn distance_is_symmetric(a in vector3_strategy(1e3), b in vector3_strategy(1e3)) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn vector2_distance_is_symmetric(a in vector2_strategy(1e3), b in vector2_strategy(1e3)) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
    }

    #[test]
    fn rotating_back_and_forth_about_axis_gives_original_vector(
        v in vector3_strategy(10.0),
        axis in unit_vector3_strategy(),
        angle in -TAU..TAU,
    ) {
        let roundtripped = v
            .rotated_about_axis(&axis, angle)
            .rotated_about_axis(&axis, -angle);
        prop_assert!(abs_diff_eq!(roundtripped, v, epsilon = 1e-4));
    }

    #[test]
    fn quaternion_rotation_back_and_forth_gives_original_vector(
        v in vector3_strategy(10.0),
        axis in unit_vector3_strategy(),
        angle in -TAU..TAU,
    ) {
        let forward = Quaternion::from_axis_angle(&axis, angle);
        let backward = Quaternion::from_axis_angle(&axis, -angle);
        let roundtripped = backward.rotate_vector(&forward.rotate_vector(&v));
        prop_assert!(abs_diff_eq!(roundtripped, v, epsilon = 1e-4));
    }

    #[test]
    fn multiplying_by_inverse_gives_identity(q in rotation_strategy()) {
        prop_assert!(abs_diff_eq!(q * q.inverse(), Quaternion::IDENTITY, epsilon = 1e-5));
    }

    #[test]
    fn slerp_reproduces_endpoints(a in rotation_strategy(), b in rotation_strategy()) {
        prop_assert!(same_rotation(&a.slerp(&b, 0.0), &a, 1e-5));
        prop_assert!(same_rotation(&a.slerp(&b, 1.0), &b, 1e-4));
    }

    #[test]
    fn slerp_gives_unit_quaternions(
        a in rotation_strategy(),
        b in rotation_strategy(),
        t in 0.0_f32..1.0,
    ) {
        let interpolated = a.slerp(&b, t);
        prop_assert!(interpolated.is_valid());
        prop_assert!(abs_diff_eq!(interpolated.norm(), 1.0, epsilon = 1e-4));
    }

    #[test]
    fn slerp_to_antiparallel_quaternion_is_finite(q in rotation_strategy(), t in 0.0_f32..1.0) {
        prop_assert!(q.slerp(&q.negated(), t).is_valid());
    }

    #[test]
    fn axis_angle_roundtrips(axis in unit_vector3_strategy(), angle in 0.01_f32..3.1) {
        let (roundtripped_axis, roundtripped_angle) =
            Quaternion::from_axis_angle(&axis, angle).to_axis_angle();
        prop_assert!(abs_diff_eq!(roundtripped_angle, angle, epsilon = 1e-3));
        prop_assert!(abs_diff_eq!(roundtripped_axis, axis, epsilon = 1e-2));
    }

    #[test]
    fn euler_angles_roundtrip_to_same_rotation(
        roll in -3.0_f32..3.0,
        pitch in -1.5_f32..1.5,
        yaw in -3.0_f32..3.0,
    ) {
        let q = Quaternion::from_euler_angles(roll, pitch, yaw);
        let (roll, pitch, yaw) = q.to_euler_angles();
        prop_assert!(same_rotation(&Quaternion::from_euler_angles(roll, pitch, yaw), &q, 1e-4));
    }

    #[test]
    fn rotation_between_vectors_maps_direction(
        from in vector3_strategy(10.0),
        to in vector3_strategy(10.0),
    ) {
        prop_assume!(from.norm() > 1e-2 && to.norm() > 1e-2);
        let q = Quaternion::rotation_between(&from, &to);
        prop_assert!(q.is_valid());
        prop_assert!(abs_diff_eq!(
            q.rotate_vector(&from.normalized()),
            to.normalized(),
            epsilon = 1e-2
        ));
    }

    #[test]
    fn flat_buffer_roundtrips(components in prop::collection::vec(-1e3_f32..1e3, 0..64)) {
        let len = components.len() - components.len() % 4;
        let data = &components[..len];
        let vectors = unpack::<Vector4>(data).unwrap();
        prop_assert_eq!(pack(&vectors), data.to_vec());

        let quaternions = unpack::<Quaternion>(data).unwrap();
        prop_assert_eq!(pack(&quaternions), data.to_vec());
    }

    #[test]
    fn single_value_buffer_roundtrips(x in -1e3_f32..1e3, y in -1e3_f32..1e3, z in -1e3_f32..1e3) {
        let data = [x, y, z];
        let v = Vector3::from_slice(&data).unwrap();
        prop_assert_eq!(v.components(), &data[..]);
        prop_assert!(Vector2::from_slice(&data).is_err());
    }
}
