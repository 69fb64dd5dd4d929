//! Collision detection and response
//!
//! Two cases: the player against the arena walls (clamp and reflect, one
//! axis at a time) and the player against the target (rectangle overlap).

use glam::Vec2;

use super::rect::Rect;

/// Result of confining a body to the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallResponse {
    /// Clamped top-left position
    pub position: Vec2,
    /// Velocity after any reflections
    pub velocity: Vec2,
    /// Number of walls touched this step (0..=2)
    pub walls_hit: u32,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Clamp a square body of side `body_size` into `[0, arena - body_size]` on
/// each axis, reflecting velocity off every wall it crossed.
///
/// Axes are handled independently, so a corner hit reflects both components.
pub fn confine_to_arena(position: Vec2, velocity: Vec2, body_size: f32, arena: Vec2) -> WallResponse {
    let bound = arena - Vec2::splat(body_size);
    let mut position = position;
    let mut velocity = velocity;
    let mut walls_hit = 0;

    for (axis, normal) in [(0, Vec2::X), (1, Vec2::Y)] {
        if position[axis] < 0.0 {
            position[axis] = 0.0;
            velocity = reflect_velocity(velocity, normal);
            walls_hit += 1;
        } else if position[axis] > bound[axis] {
            position[axis] = bound[axis];
            velocity = reflect_velocity(velocity, -normal);
            walls_hit += 1;
        }
    }

    WallResponse {
        position,
        velocity,
        walls_hit,
    }
}

/// Check if the player touched the target this frame
#[inline]
pub fn player_target_collision(player: &Rect, target: &Rect) -> bool {
    player.overlaps(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_reflect_velocity() {
        // Moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_keeps_tangential_component() {
        let reflected = reflect_velocity(Vec2::new(-3.0, 4.0), Vec2::X);
        assert_eq!(reflected, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_inside_is_untouched() {
        let res = confine_to_arena(Vec2::new(100.0, 100.0), Vec2::new(-1.0, 1.0), 10.0, ARENA);
        assert_eq!(res.position, Vec2::new(100.0, 100.0));
        assert_eq!(res.velocity, Vec2::new(-1.0, 1.0));
        assert_eq!(res.walls_hit, 0);
    }

    #[test]
    fn test_left_wall() {
        let res = confine_to_arena(Vec2::new(-4.0, 50.0), Vec2::new(-2.0, 0.5), 10.0, ARENA);
        assert_eq!(res.position, Vec2::new(0.0, 50.0));
        assert_eq!(res.velocity, Vec2::new(2.0, 0.5));
        assert_eq!(res.walls_hit, 1);
    }

    #[test]
    fn test_far_walls_account_for_body_size() {
        let res = confine_to_arena(Vec2::new(795.0, 599.0), Vec2::new(1.0, 2.0), 10.0, ARENA);
        assert_eq!(res.position, Vec2::new(790.0, 590.0));
        assert_eq!(res.velocity, Vec2::new(-1.0, -2.0));
        assert_eq!(res.walls_hit, 2);
    }

    #[test]
    fn test_player_target_collision() {
        let player = Rect::square(Vec2::new(100.0, 100.0), 10.0);
        let near = Rect::square(Vec2::new(105.0, 95.0), 20.0);
        let far = Rect::square(Vec2::new(300.0, 300.0), 20.0);
        assert!(player_target_collision(&player, &near));
        assert!(!player_target_collision(&player, &far));
    }
}
