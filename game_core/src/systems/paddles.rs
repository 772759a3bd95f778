use hecs::World;

use crate::arena::Arena;
use crate::components::{Paddle, Side};
use crate::config::Mode;
use crate::params::Params;
use crate::resources::InputState;

/// Apply held movement keys to the human-controlled paddles.
///
/// The left paddle is always human. The right paddle only listens to input
/// in PvP mode; in PvAI it is driven by [`crate::systems::ai::control`].
/// Both paddles end the frame clamped to the vertical bounds.
pub fn apply_input(world: &mut World, arena: &Arena, input: &InputState, mode: Mode) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = match paddle.side {
            Side::Left => (input.left_up, input.left_down),
            Side::Right => {
                if mode != Mode::PvP {
                    continue;
                }
                (input.right_up, input.right_down)
            }
        };

        if up && paddle.rect.top() > 0 {
            paddle.rect.y -= Params::HUMAN_PADDLE_SPEED;
        }
        if down && paddle.rect.bottom() < arena.height {
            paddle.rect.y += Params::HUMAN_PADDLE_SPEED;
        }
        arena.clamp_paddle(&mut paddle.rect);
    }
}
