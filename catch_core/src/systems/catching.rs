use crate::{Aabb, Fish, FrameEvents, Score};
use hecs::World;

/// Catch every fish overlapping the hook.
///
/// Caught fish are despawned, so later checks never see them again.
pub fn check_catches(
    world: &mut World,
    hook_bounds: &Aabb,
    score: &mut Score,
    events: &mut FrameEvents,
) {
    let mut caught = Vec::new();

    for (entity, fish) in world.query::<&Fish>().iter() {
        if fish.bounds().intersects(hook_bounds) {
            caught.push(entity);
        }
    }

    for entity in caught {
        if world.despawn(entity).is_ok() {
            score.increment();
            events.caught.push(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FishKind;
    use glam::Vec2;

    fn hook_at(x: f32, y: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, y), Vec2::splat(32.0))
    }

    #[test]
    fn test_overlapping_fish_caught() {
        let mut world = World::new();
        let mut score = Score::new();
        let mut events = FrameEvents::new();
        let e = world.spawn((Fish::new(FishKind::Perch, Vec2::new(210.0, 300.0), 50.0),));

        check_catches(&mut world, &hook_at(200.0, 300.0), &mut score, &mut events);

        assert_eq!(score.caught, 1);
        assert_eq!(events.caught, vec![e]);
        assert!(!world.contains(e));
    }

    #[test]
    fn test_distant_fish_left_alone() {
        let mut world = World::new();
        let mut score = Score::new();
        let mut events = FrameEvents::new();
        let e = world.spawn((Fish::new(FishKind::Perch, Vec2::new(600.0, 300.0), 50.0),));

        check_catches(&mut world, &hook_at(200.0, 300.0), &mut score, &mut events);

        assert_eq!(score.caught, 0);
        assert!(events.caught.is_empty());
        assert!(world.contains(e));
    }

    #[test]
    fn test_multiple_catches_in_one_check() {
        let mut world = World::new();
        let mut score = Score::new();
        let mut events = FrameEvents::new();
        world.spawn((Fish::new(FishKind::Fish, Vec2::new(190.0, 300.0), 50.0),));
        world.spawn((Fish::new(FishKind::Pike, Vec2::new(230.0, 320.0), -70.0),));
        world.spawn((Fish::new(FishKind::Roach, Vec2::new(205.0, 280.0), 90.0),));

        check_catches(&mut world, &hook_at(200.0, 300.0), &mut score, &mut events);

        assert_eq!(score.caught, 3);
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn test_caught_fish_never_scores_twice() {
        let mut world = World::new();
        let mut score = Score::new();
        let mut events = FrameEvents::new();
        world.spawn((Fish::new(FishKind::Zander, Vec2::new(200.0, 300.0), 50.0),));
        let hook = hook_at(200.0, 300.0);

        check_catches(&mut world, &hook, &mut score, &mut events);
        events.clear();
        check_catches(&mut world, &hook, &mut score, &mut events);

        assert_eq!(score.caught, 1);
        assert!(events.caught.is_empty());
    }
}
