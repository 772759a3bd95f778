use hecs::World;

use crate::components::Ball;
use crate::resources::Trail;

/// Integrate ball positions by one frame.
///
/// Velocity components are truncated toward zero when applied to the
/// integer rect, exactly like the classic arcade build; the sub-pixel
/// remainder is dropped, not accumulated. The primary ball's center is
/// recorded for the fading trail.
pub fn integrate(world: &mut World, trail: &mut Trail) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.x += ball.vel.x as i32;
        ball.rect.y += ball.vel.y as i32;
    }
    if let Some(ball) = crate::primary_ball(world) {
        trail.push(ball.rect.center());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Rect;
    use glam::Vec2;

    #[test]
    fn test_integration_truncates_subpixel_velocity() {
        let mut world = World::new();
        let mut trail = Trail::new();
        let ball = Ball::new(Rect::new(100, 100, 20, 20), Vec2::new(3.9, -2.7));
        world.spawn((ball,));

        integrate(&mut world, &mut trail);

        let ball = *world.query::<&Ball>().iter().next().map(|(_e, b)| b).unwrap();
        assert_eq!(ball.rect.x, 103, "3.9 truncates to 3");
        assert_eq!(ball.rect.y, 98, "-2.7 truncates to -2");
        assert_eq!(ball.vel, Vec2::new(3.9, -2.7), "Velocity itself is untouched");
    }

    #[test]
    fn test_trail_records_primary_ball() {
        let mut world = World::new();
        let mut trail = Trail::new();
        let ball = Ball::new(Rect::new(100, 100, 20, 20), Vec2::new(5.0, 0.0));
        world.spawn((ball,));

        integrate(&mut world, &mut trail);
        integrate(&mut world, &mut trail);

        assert_eq!(trail.0, vec![(115, 110), (120, 110)]);
    }
}
