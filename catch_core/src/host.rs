//! Host engine capabilities
//!
//! The catch loop never talks to a renderer, audio device or physics engine
//! directly. Whatever hosts the scene hands it these capabilities instead.

use glam::Vec2;
use hecs::Entity;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{Aabb, FishKind, WorldBounds};

/// The hook's physics body
pub trait HookBody {
    fn position(&self) -> Vec2;
    /// Teleport without physics integration
    fn set_position(&mut self, pos: Vec2);
    fn set_velocity(&mut self, vel: Vec2);
    fn set_velocity_x(&mut self, vx: f32);
    fn set_velocity_y(&mut self, vy: f32);
    /// Place the hook horizontally without physics integration
    fn set_x(&mut self, x: f32);
    fn set_allow_gravity(&mut self, on: bool);
    fn half_height(&self) -> f32;
    /// Rectangle used for catch tests
    fn bounds(&self) -> Aabb;
    /// Integrate one physics step
    fn step(&mut self, dt: f32);
}

/// Scene graph the loop draws into
pub trait Stage {
    fn follow_hook(&mut self);
    fn scroll_camera_y(&mut self, dy: f32);
    fn add_depth_marker(&mut self, y: f32, label: &str);
    fn spawn_fish(&mut self, id: Entity, kind: FishKind, pos: Vec2, flip_x: bool);
    fn move_fish(&mut self, id: Entity, pos: Vec2, flip_x: bool);
    fn remove_fish(&mut self, id: Entity);
    fn set_score_text(&mut self, text: &str);
    /// Drop everything the scene placed
    fn clear(&mut self);
}

/// Sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Catch,
}

impl Sound {
    pub fn key(&self) -> &'static str {
        match self {
            Sound::Catch => "catch",
        }
    }
}

/// Fire-and-forget audio playback
pub trait Audio {
    fn play(&mut self, sound: Sound);
}

/// Scene manager and the "scene ready" announcement
pub trait SceneDirector {
    fn announce_ready(&mut self, scene: &str);
    fn start(&mut self, scene: &str);
}

/// Everything the loop needs from its host
pub struct Host {
    pub body: Box<dyn HookBody>,
    pub stage: Box<dyn Stage>,
    pub audio: Box<dyn Audio>,
    pub scenes: Box<dyn SceneDirector>,
}

// Shared handles let a host keep its own view of a capability after
// handing it to the loop.
impl<B: HookBody + ?Sized> HookBody for Rc<RefCell<B>> {
    fn position(&self) -> Vec2 {
        self.borrow().position()
    }
    fn set_position(&mut self, pos: Vec2) {
        self.borrow_mut().set_position(pos)
    }
    fn set_velocity(&mut self, vel: Vec2) {
        self.borrow_mut().set_velocity(vel)
    }
    fn set_velocity_x(&mut self, vx: f32) {
        self.borrow_mut().set_velocity_x(vx)
    }
    fn set_velocity_y(&mut self, vy: f32) {
        self.borrow_mut().set_velocity_y(vy)
    }
    fn set_x(&mut self, x: f32) {
        self.borrow_mut().set_x(x)
    }
    fn set_allow_gravity(&mut self, on: bool) {
        self.borrow_mut().set_allow_gravity(on)
    }
    fn half_height(&self) -> f32 {
        self.borrow().half_height()
    }
    fn bounds(&self) -> Aabb {
        self.borrow().bounds()
    }
    fn step(&mut self, dt: f32) {
        self.borrow_mut().step(dt)
    }
}

impl<S: Stage + ?Sized> Stage for Rc<RefCell<S>> {
    fn follow_hook(&mut self) {
        self.borrow_mut().follow_hook()
    }
    fn scroll_camera_y(&mut self, dy: f32) {
        self.borrow_mut().scroll_camera_y(dy)
    }
    fn add_depth_marker(&mut self, y: f32, label: &str) {
        self.borrow_mut().add_depth_marker(y, label)
    }
    fn spawn_fish(&mut self, id: Entity, kind: FishKind, pos: Vec2, flip_x: bool) {
        self.borrow_mut().spawn_fish(id, kind, pos, flip_x)
    }
    fn move_fish(&mut self, id: Entity, pos: Vec2, flip_x: bool) {
        self.borrow_mut().move_fish(id, pos, flip_x)
    }
    fn remove_fish(&mut self, id: Entity) {
        self.borrow_mut().remove_fish(id)
    }
    fn set_score_text(&mut self, text: &str) {
        self.borrow_mut().set_score_text(text)
    }
    fn clear(&mut self) {
        self.borrow_mut().clear()
    }
}

/// Simple arcade body: gravity, velocity integration and a zero-bounce
/// world-bounds clamp. The hook's footprint is a circle of diameter `size`.
#[derive(Debug, Clone)]
pub struct ArcadeBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub gravity: f32,
    pub allow_gravity: bool,
    pub world: WorldBounds,
}

impl ArcadeBody {
    pub fn new(pos: Vec2, size: f32, gravity: f32, world: WorldBounds) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            gravity,
            allow_gravity: false,
            world,
        }
    }

    fn collide_world_bounds(&mut self) {
        let half = self.size / 2.0;

        let x = self.world.clamp_x(self.pos.x, half);
        if x != self.pos.x {
            self.pos.x = x;
            self.vel.x = 0.0;
        }

        let y = self.world.clamp_y(self.pos.y, half);
        if y != self.pos.y {
            self.pos.y = y;
            self.vel.y = 0.0;
        }
    }
}

impl HookBody for ArcadeBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn set_velocity_x(&mut self, vx: f32) {
        self.vel.x = vx;
    }

    fn set_velocity_y(&mut self, vy: f32) {
        self.vel.y = vy;
    }

    fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    fn set_allow_gravity(&mut self, on: bool) {
        self.allow_gravity = on;
    }

    fn half_height(&self) -> f32 {
        self.size / 2.0
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    fn step(&mut self, dt: f32) {
        if self.allow_gravity {
            self.vel.y += self.gravity * dt;
        }
        self.pos += self.vel * dt;
        self.collide_world_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> ArcadeBody {
        ArcadeBody::new(
            Vec2::new(100.0, 100.0),
            32.0,
            300.0,
            WorldBounds::new(400.0, 300.0),
        )
    }

    #[test]
    fn test_no_motion_without_gravity_or_velocity() {
        let mut body = body();
        body.step(0.1);
        assert_eq!(body.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let mut body = body();
        body.set_allow_gravity(true);
        body.step(0.1);
        assert!((body.vel.y - 30.0).abs() < 1e-4);
        assert!(body.pos.y > 100.0);
    }

    #[test]
    fn test_floor_clamps_and_stops() {
        let mut body = body();
        body.set_velocity(Vec2::new(0.0, 5000.0));
        body.step(0.1);
        assert_eq!(body.pos.y, 300.0 - 16.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let mut body = body();
        body.set_velocity_y(-300.0);
        body.step(1.0);
        assert_eq!(body.pos.y, 16.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_side_walls_clamp_x() {
        let mut body = body();
        body.set_x(-50.0);
        body.step(0.016);
        assert_eq!(body.pos.x, 16.0);
    }

    #[test]
    fn test_bounds_is_square_footprint() {
        let body = body();
        let bounds = body.bounds();
        assert_eq!(bounds.min, Vec2::new(84.0, 84.0));
        assert_eq!(bounds.max, Vec2::new(116.0, 116.0));
        assert_eq!(body.half_height(), 16.0);
    }
}
