use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng};

/// Fish archetypes, each with its own texture and display size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishKind {
    Fish,
    Perch,
    Pike,
    Roach,
    Zander,
}

impl FishKind {
    pub const ALL: [FishKind; 5] = [
        FishKind::Fish,
        FishKind::Perch,
        FishKind::Pike,
        FishKind::Roach,
        FishKind::Zander,
    ];

    /// Texture key used by the stage
    pub fn key(&self) -> &'static str {
        match self {
            FishKind::Fish => "fish",
            FishKind::Perch => "perch",
            FishKind::Pike => "pike",
            FishKind::Roach => "roach",
            FishKind::Zander => "zander",
        }
    }

    /// Display size in pixels
    pub fn size(&self) -> Vec2 {
        match self {
            FishKind::Fish | FishKind::Perch => Vec2::splat(32.0),
            FishKind::Pike => Vec2::splat(100.0),
            FishKind::Roach => Vec2::splat(35.0),
            FishKind::Zander => Vec2::splat(40.0),
        }
    }
}

/// Fish component - swims horizontally, bouncing off the side edges
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    pub kind: FishKind,
    pub pos: Vec2,
    pub speed: f32, // Signed, px/s (negative = swimming left)
    pub flip_x: bool, // Always `speed < 0`
}

impl Fish {
    pub fn new(kind: FishKind, pos: Vec2, speed: f32) -> Self {
        Self {
            kind,
            pos,
            speed,
            flip_x: speed < 0.0,
        }
    }

    /// Random archetype, position and heading within the configured ranges
    pub fn random(config: &Config, rng: &mut GameRng) -> Self {
        let kind = FishKind::ALL[rng.0.gen_range(0..FishKind::ALL.len())];

        let margin = config.fish_spawn_margin;
        let x = whole_between(rng, margin, config.world_width - margin);
        let y = whole_between(rng, margin, config.world_height - margin);

        let magnitude = rng
            .0
            .gen_range(config.fish_speed_min..=config.fish_speed_max) as f32;
        let speed = if rng.0.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };

        Self::new(kind, Vec2::new(x, y), speed)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.kind.size())
    }

    /// Turn around, facing the new direction
    pub fn reverse(&mut self) {
        self.speed = -self.speed;
        self.flip_x = self.speed < 0.0;
    }
}

/// Uniform whole number in `[min, max]`
fn whole_between(rng: &mut GameRng, min: f32, max: f32) -> f32 {
    let lo = min.ceil() as i64;
    let hi = (max.floor() as i64).max(lo);
    rng.0.gen_range(lo..=hi) as f32
}
