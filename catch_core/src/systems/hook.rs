use crate::fsm::{BodyEffect, HookMode, Trigger};
use crate::host::HookBody;
use crate::{Config, FrameEvents, WorldBounds};

/// Apply the body side of a mode change
pub fn apply_effect(body: &mut dyn HookBody, effect: BodyEffect) {
    match effect {
        BodyEffect::Hold => {
            body.set_allow_gravity(false);
            body.set_velocity(glam::Vec2::ZERO);
        }
        BodyEffect::Release => {
            body.set_allow_gravity(true);
        }
        BodyEffect::Ascend { speed } => {
            body.set_allow_gravity(false);
            body.set_velocity_y(-speed);
        }
    }
}

/// Fire a trigger; returns true when the mode changed
pub fn fire(
    mode: &mut HookMode,
    body: &mut dyn HookBody,
    trigger: Trigger,
    config: &Config,
) -> bool {
    match mode.next(trigger) {
        Some(next) => {
            log::debug!("hook {:?} -> {:?} on {:?}", mode, next, trigger);
            *mode = next;
            apply_effect(body, next.on_enter(config.ascent_speed));
            true
        }
        None => false,
    }
}

/// Per-frame hook rules: reel in at the bottom, stop at the top.
///
/// Returns whether the hook was reeling in this frame, which is what gates
/// catching. That includes the frame on which it surfaces.
pub fn update_hook(
    mode: &mut HookMode,
    body: &mut dyn HookBody,
    world: &WorldBounds,
    config: &Config,
    events: &mut FrameEvents,
) -> bool {
    let half_height = body.half_height();

    if world.at_bottom(body.position().y, half_height)
        && fire(mode, body, Trigger::ReachedBottom, config)
    {
        events.return_started = true;
    }

    if !mode.is_returning() {
        return false;
    }

    // No sideways drift on the way up
    body.set_velocity_x(0.0);

    if world.at_top(body.position().y, half_height)
        && fire(mode, body, Trigger::ReachedTop, config)
    {
        events.hook_surfaced = true;
    }

    true
}
