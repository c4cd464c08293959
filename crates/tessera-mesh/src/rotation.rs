//! Quaternion helpers working in degrees, and the mapping from model-space
//! directions to world-space neighbor offsets.

use glam::{DVec3, IVec3, Quat, Vec3};
use tessera_model::ModelRotation;

/// Builds `Qy(yaw) * Qx(pitch) * Qz(roll)`: roll is applied first, yaw last.
pub fn from_axes_angles_deg(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_rotation_y(yaw.to_radians())
        * Quat::from_rotation_x(pitch.to_radians())
        * Quat::from_rotation_z(roll.to_radians())
}

/// Decomposes `q` back into `(pitch, yaw, roll)` degrees, the inverse of
/// [`from_axes_angles_deg`].
///
/// Near the ±90° pitch singularity roll is pinned to zero and the whole
/// remaining rotation is reported as yaw.
pub fn axes_angles_deg(q: Quat) -> Vec3 {
    let (x, y, z, w) = (q.x as f64, q.y as f64, q.z as f64, q.w as f64);
    let test = w * x - y * z;

    let (pitch, yaw, roll) = if test.abs() < 0.4999 {
        (
            (2.0 * test).asin(),
            (2.0 * (w * y + z * x)).atan2(1.0 - 2.0 * (x * x + y * y)),
            (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (x * x + z * z)),
        )
    } else {
        let sign = if test < 0.0 { -1.0 } else { 1.0 };
        (
            sign * std::f64::consts::FRAC_PI_2,
            -sign * 2.0 * z.atan2(w),
            0.0,
        )
    };

    DVec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees()).as_vec3()
}

/// Rotation of `angle` degrees about `axis`. A zero-length axis yields the
/// identity.
pub fn from_angle_deg_axis(angle: f32, axis: Vec3) -> Quat {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, angle.to_radians()),
        None => Quat::IDENTITY,
    }
}

/// The rotation that carries model space into world space: the inverse of
/// the placement rotation, applied as −x then −y.
pub fn model_inverse_rotation(rotation: ModelRotation) -> Quat {
    from_axes_angles_deg(-(rotation.x as f32), -(rotation.y as f32), 0.0)
}

/// Maps a model-space vector into world space.
pub fn rotation_relative(rotation: ModelRotation, v: Vec3) -> Vec3 {
    if rotation.is_identity() {
        return v;
    }
    model_inverse_rotation(rotation) * v
}

/// World-space voxel offset for a model-space direction, rounded to the
/// nearest cell.
pub fn rotation_relative_offset(rotation: ModelRotation, v: Vec3) -> IVec3 {
    rotation_relative(rotation, v).round().as_ivec3()
}
