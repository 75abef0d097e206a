use crate::{Fish, WorldBounds};
use hecs::World;

/// Swim every fish horizontally, turning around past the side edges
pub fn move_fish(world: &mut World, bounds: &WorldBounds, dt: f32) {
    for (entity, fish) in world.query_mut::<&mut Fish>() {
        fish.pos.x += fish.speed * dt;

        if bounds.outside_x(fish.pos.x) {
            fish.reverse();
            log::trace!("fish {:?} turned at x={}", entity, fish.pos.x);
        }
    }
}
