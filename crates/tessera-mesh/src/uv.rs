//! UV quad transforms: continuous rotation about the texture center, discrete
//! 90° corner shifts, and the UV-lock counter-rotation angle.
//!
//! A UV quad is always four corners in the same order as the positions they
//! pair with.

use glam::Vec2;
use tessera_model::{Direction, ModelRotation};

use crate::constants::HALF_2;
use crate::rotation::{axes_angles_deg, from_axes_angles_deg};

/// Lays out the four corners of a 0–16 UV rectangle `(x1, y1, x2, y2)` in
/// unit UV space: bottom-left, bottom-right, top-right, top-left.
pub fn quad_from_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> [Vec2; 4] {
    let (x1, y1, x2, y2) = (x1 / 16.0, y1 / 16.0, x2 / 16.0, y2 / 16.0);
    [
        Vec2::new(x1, y2),
        Vec2::new(x2, y2),
        Vec2::new(x2, y1),
        Vec2::new(x1, y1),
    ]
}

/// Rotates every corner about `(0.5, 0.5)` by `angle_degrees`.
///
/// Angles that fold to 0 return the quad untouched, and quarter turns use
/// exact sine/cosine values so axis-aligned UVs stay on the texture edges.
pub fn rotate_continuous(uvs: [Vec2; 4], angle_degrees: f32) -> [Vec2; 4] {
    let angle = angle_degrees.rem_euclid(360.0);
    if angle == 0.0 {
        return uvs;
    }

    let (sin, cos) = match angle {
        90.0 => (1.0, 0.0),
        180.0 => (0.0, -1.0),
        270.0 => (-1.0, 0.0),
        _ => angle.to_radians().sin_cos(),
    };

    uvs.map(|uv| {
        let p = uv - HALF_2;
        Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + HALF_2
    })
}

/// Number of corner positions [`rotate_discrete`] shifts by: the negated
/// quarter-turn count, folded into `0..4`.
pub fn discrete_steps(angle_degrees: i32) -> usize {
    (-angle_degrees.div_euclid(90)).rem_euclid(4) as usize
}

/// Cyclically shifts the corners by [`discrete_steps`], moving the last
/// corner to the front once per step.
pub fn rotate_discrete(mut uvs: [Vec2; 4], angle_degrees: i32) -> [Vec2; 4] {
    uvs.rotate_right(discrete_steps(angle_degrees));
    uvs
}

/// Counter-rotation that keeps a face's texture world-aligned when the whole
/// model is rotated.
pub fn uv_lock_angle(rotation: ModelRotation, direction: Direction) -> f32 {
    let rot = from_axes_angles_deg(rotation.x as f32, rotation.y as f32, 0.0);
    let mut angle = axes_angles_deg(rot).dot(direction.vector_f32()).round();

    // Flipped models need an extra half turn unless the yaw is a quarter turn.
    if rotation.x >= 180 && rotation.y != 90 && rotation.y != 270 {
        angle += 180.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> [Vec2; 4] {
        quad_from_rect(0.0, 0.0, 16.0, 16.0)
    }

    fn approx(a: [Vec2; 4], b: [Vec2; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(a, b)| (*a - *b).abs().max_element() < 1e-5)
    }

    #[test]
    fn test_rect_corner_layout() {
        let q = quad_from_rect(0.0, 0.0, 8.0, 16.0);
        assert_eq!(q[0], Vec2::new(0.0, 1.0));
        assert_eq!(q[1], Vec2::new(0.5, 1.0));
        assert_eq!(q[2], Vec2::new(0.5, 0.0));
        assert_eq!(q[3], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_discrete_zero_and_full_turn_are_identity() {
        assert_eq!(rotate_discrete(quad(), 0), quad());
        assert_eq!(rotate_discrete(quad(), 360), quad());
    }

    #[test]
    fn test_discrete_four_quarter_turns_restore_order() {
        let mut q = quad();
        for _ in 0..4 {
            q = rotate_discrete(q, 90);
        }
        assert_eq!(q, quad());
    }

    #[test]
    fn test_discrete_step_counts() {
        assert_eq!(discrete_steps(0), 0);
        assert_eq!(discrete_steps(90), 3);
        assert_eq!(discrete_steps(180), 2);
        assert_eq!(discrete_steps(270), 1);
        assert_eq!(discrete_steps(-90), 1);
        assert_eq!(discrete_steps(45), 0);
    }

    #[test]
    fn test_discrete_shift_moves_last_to_front() {
        let q = quad();
        let shifted = rotate_discrete(q, 270);
        assert_eq!(shifted, [q[3], q[0], q[1], q[2]]);
    }

    #[test]
    fn test_continuous_zero_is_identity() {
        assert_eq!(rotate_continuous(quad(), 0.0), quad());
        assert_eq!(rotate_continuous(quad(), 720.0), quad());
    }

    #[test]
    fn test_continuous_round_trip() {
        let q = quad_from_rect(2.0, 3.0, 11.0, 14.0);
        for angle in [30.0, 90.0, 135.0, 270.0] {
            let back = rotate_continuous(rotate_continuous(q, angle), -angle);
            assert!(approx(back, q), "angle {angle}");
        }
    }

    #[test]
    fn test_continuous_quarter_turn_stays_in_unit_square() {
        let rotated = rotate_continuous(quad(), 90.0);
        for uv in rotated {
            assert!(uv.x >= 0.0 && uv.x <= 1.0 && uv.y >= 0.0 && uv.y <= 1.0);
        }
        // (0, 1) turns counter-clockwise onto (0, 0).
        assert_eq!(rotated[0], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_uv_lock_unrotated_is_zero() {
        for dir in Direction::ALL {
            assert_eq!(uv_lock_angle(ModelRotation::IDENTITY, dir), 0.0);
        }
    }

    #[test]
    fn test_uv_lock_yaw_turns_top_and_bottom() {
        let rotation = ModelRotation::new(0, 90);
        assert_eq!(uv_lock_angle(rotation, Direction::Up), 90.0);
        assert_eq!(uv_lock_angle(rotation, Direction::Down), -90.0);
        assert_eq!(uv_lock_angle(rotation, Direction::North), 0.0);
    }

    #[test]
    fn test_uv_lock_flipped_model_adds_half_turn() {
        let rotation = ModelRotation::new(180, 180);
        assert_eq!(uv_lock_angle(rotation, Direction::Up).rem_euclid(360.0), 180.0);
        assert_eq!(uv_lock_angle(rotation, Direction::North).rem_euclid(360.0), 0.0);
    }
}
