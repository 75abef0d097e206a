//! Hook control state machine
//!
//! Pure transition table for the hook. Applying the resulting body effects is
//! left to the caller so the rules can be tested without a physics body.

/// Who is in control of the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookMode {
    /// Hook X follows the pointer, no gravity
    #[default]
    Dragging,
    /// Released; gravity pulls the hook down
    Falling,
    /// Being reeled back to the surface
    Returning,
}

/// Events that can move the hook between modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PointerDown,
    PointerUp,
    ReachedBottom,
    ReachedTop,
}

/// What entering a mode does to the hook's physics body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyEffect {
    /// Gravity off, velocity zeroed
    Hold,
    /// Gravity on, velocity untouched
    Release,
    /// Gravity off, vertical velocity set to `-speed`
    Ascend { speed: f32 },
}

impl HookMode {
    pub fn is_dragging(&self) -> bool {
        matches!(self, HookMode::Dragging)
    }

    pub fn is_returning(&self) -> bool {
        matches!(self, HookMode::Returning)
    }

    /// Gravity applies only while free-falling
    pub fn gravity_enabled(&self) -> bool {
        matches!(self, HookMode::Falling)
    }

    /// Next mode for a trigger, or `None` when the trigger is ignored
    pub fn next(self, trigger: Trigger) -> Option<HookMode> {
        match (self, trigger) {
            // Reeling in locks out the pointer
            (HookMode::Returning, Trigger::PointerDown | Trigger::PointerUp) => None,

            // Pressing always takes back control, even mid-fall
            (_, Trigger::PointerDown) => Some(HookMode::Dragging),
            (_, Trigger::PointerUp) => Some(HookMode::Falling),

            (HookMode::Dragging | HookMode::Falling, Trigger::ReachedBottom) => {
                Some(HookMode::Returning)
            }
            (HookMode::Returning, Trigger::ReachedTop) => Some(HookMode::Dragging),

            _ => None,
        }
    }

    /// Body effect applied on entering this mode
    pub fn on_enter(self, ascent_speed: f32) -> BodyEffect {
        match self {
            HookMode::Dragging => BodyEffect::Hold,
            HookMode::Falling => BodyEffect::Release,
            HookMode::Returning => BodyEffect::Ascend {
                speed: ascent_speed,
            },
        }
    }
}
