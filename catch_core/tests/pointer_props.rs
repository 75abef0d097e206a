use catch_core::systems::{apply_pointer, update_hook};
use catch_core::*;
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Pointer(PointerEvent),
    Frames(u8),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Pointer(PointerEvent::Down)),
        Just(Step::Pointer(PointerEvent::Up)),
        (0.0f32..1024.0).prop_map(|x| Step::Pointer(PointerEvent::Move { x, y: 0.0 })),
        (1u8..90).prop_map(Step::Frames),
    ]
}

proptest! {
    #[test]
    fn gravity_tracks_free_fall(steps in prop::collection::vec(step_strategy(), 1..60)) {
        let config = Config::new();
        let world = WorldBounds::new(config.world_width, config.world_height);
        let mut body = ArcadeBody::new(config.hook_start(), config.hook_size, config.gravity, world);
        let mut mode = HookMode::Dragging;
        let mut events = FrameEvents::new();

        for step in steps {
            match step {
                Step::Pointer(event) => {
                    let was_returning = mode.is_returning();
                    apply_pointer(&mut mode, &mut body, event, &config);

                    if event == PointerEvent::Up && !was_returning {
                        prop_assert!(body.allow_gravity);
                        prop_assert!(!mode.is_dragging());
                    }
                    if event == PointerEvent::Down && !was_returning {
                        prop_assert_eq!(mode, HookMode::Dragging);
                        prop_assert_eq!(body.vel, Vec2::ZERO);
                    }
                }
                Step::Frames(n) => {
                    for _ in 0..n {
                        body.step(1.0 / 60.0);
                        events.clear();
                        update_hook(&mut mode, &mut body, &world, &config, &mut events);
                        if mode.is_returning() {
                            prop_assert_eq!(body.vel.x, 0.0);
                        }
                    }
                }
            }

            prop_assert_eq!(body.allow_gravity, mode.gravity_enabled());
            prop_assert!(!(mode.is_dragging() && mode.is_returning()));
        }
    }

    #[test]
    fn return_always_launches_at_ascent_speed(x in 16.0f32..1000.0) {
        let config = Config::new();
        let world = WorldBounds::new(config.world_width, config.world_height);
        let mut body = ArcadeBody::new(config.hook_start(), config.hook_size, config.gravity, world);
        let mut mode = HookMode::Dragging;
        let mut events = FrameEvents::new();

        apply_pointer(&mut mode, &mut body, PointerEvent::Move { x, y: 0.0 }, &config);
        apply_pointer(&mut mode, &mut body, PointerEvent::Up, &config);

        for _ in 0..1000 {
            body.step(1.0 / 60.0);
            events.clear();
            update_hook(&mut mode, &mut body, &world, &config, &mut events);
            if events.return_started {
                break;
            }
        }

        prop_assert!(events.return_started);
        prop_assert_eq!(body.vel.y, -300.0);
        prop_assert!(!body.allow_gravity);
    }
}
