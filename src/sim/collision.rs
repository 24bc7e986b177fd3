//! Collision detection and response for axis-aligned bodies
//!
//! Resolution is axis-separated: the caller moves along x and resolves,
//! then moves along y and resolves. Every platform is tested on each pass;
//! levels only hold a handful of them.

use super::body::Body;
use super::level::Platform;

/// Push a body out of every platform it overlaps after horizontal movement.
///
/// Moving right stops at the platform's left edge, moving left at its right
/// edge. Horizontal velocity is zeroed on any overlap.
pub fn resolve_horizontal(body: &mut Body, platforms: &[Platform]) {
    for platform in platforms {
        if !body.rect().overlaps(&platform.rect) {
            continue;
        }
        if body.vel.x > 0.0 {
            body.set_right(platform.rect.left());
        } else if body.vel.x < 0.0 {
            body.set_left(platform.rect.right());
        }
        body.vel.x = 0.0;
    }
}

/// Push a body out of every platform it overlaps after vertical movement.
///
/// Falling lands on the platform top and sets `grounded`; rising stops at
/// the platform bottom. Vertical velocity is zeroed on any overlap.
pub fn resolve_vertical(body: &mut Body, platforms: &[Platform]) {
    for platform in platforms {
        if !body.rect().overlaps(&platform.rect) {
            continue;
        }
        if body.vel.y > 0.0 {
            body.set_bottom(platform.rect.top());
            body.grounded = true;
        } else if body.vel.y < 0.0 {
            body.set_top(platform.rect.bottom());
        }
        body.vel.y = 0.0;
    }
}

/// Check whether two hitboxes touch (hero vs enemy)
#[inline]
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    a.rect().overlaps(&b.rect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn wall(x: f32) -> Platform {
        Platform::new(x, 0.0, 20.0, 200.0)
    }

    #[test]
    fn test_moving_right_stops_at_left_edge() {
        let platforms = [wall(100.0)];
        // Right edge 98 -> 102 overlaps the wall at 100
        let mut body = Body::new(Vec2::new(88.0, 100.0), Vec2::new(20.0, 20.0));
        body.vel.x = 4.0;

        body.step_horizontal(&platforms);

        assert_eq!(body.rect().right(), 100.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_moving_left_stops_at_right_edge() {
        let platforms = [wall(100.0)];
        let mut body = Body::new(Vec2::new(133.0, 100.0), Vec2::new(20.0, 20.0));
        body.vel.x = -4.0;

        body.step_horizontal(&platforms);

        assert_eq!(body.rect().left(), 120.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_falling_lands_on_top() {
        let tuning = Tuning::default();
        let platforms = [Platform::new(0.0, 300.0, 400.0, 20.0)];
        let mut body = Body::new(Vec2::new(200.0, 285.0), Vec2::new(20.0, 20.0));
        body.vel.y = 6.0;

        body.step_vertical(&platforms, &tuning);

        assert_eq!(body.rect().bottom(), 300.0);
        assert!(body.grounded);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_rising_bonks_on_bottom() {
        let tuning = Tuning::default();
        let platforms = [Platform::new(0.0, 100.0, 400.0, 20.0)];
        let mut body = Body::new(Vec2::new(200.0, 135.0), Vec2::new(20.0, 20.0));
        body.vel.y = -13.0;

        body.step_vertical(&platforms, &tuning);

        assert_eq!(body.rect().top(), 120.0);
        assert!(!body.grounded);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_resting_body_is_not_pushed_sideways() {
        // Bottom edge flush with the platform top does not count as overlap
        let tuning = Tuning::default();
        let platforms = [Platform::new(0.0, 300.0, 400.0, 20.0)];
        let mut body = Body::new(Vec2::new(200.0, 290.0), Vec2::new(20.0, 20.0));
        body.vel.x = 4.0;

        body.update_position(&platforms, &tuning);

        assert_eq!(body.pos.x, 204.0);
        assert_eq!(body.vel.x, 4.0);
        assert!(body.grounded);
    }

    #[test]
    fn test_horizontal_pass_runs_before_vertical() {
        // Corner case: body moves into a wall and downward at once. The wall
        // stops x first, so the later y pass sees no overlap with it.
        let tuning = Tuning::default();
        let platforms = [wall(100.0)];
        let mut body = Body::new(Vec2::new(88.0, 50.0), Vec2::new(20.0, 20.0));
        body.vel = Vec2::new(5.0, 3.0);

        body.update_position(&platforms, &tuning);

        assert_eq!(body.rect().right(), 100.0);
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.vel.y, 3.5);
        assert!(!body.grounded);
    }

    #[test]
    fn test_bodies_overlap() {
        let a = Body::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Body::new(Vec2::new(9.0, 0.0), Vec2::splat(10.0));
        let c = Body::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(bodies_overlap(&a, &b));
        assert!(!bodies_overlap(&a, &c));
    }
}
