use hecs::World;

use crate::host::{Host, Sound};
use crate::systems::*;
use crate::{
    Config, ConfigError, Fish, FrameEvents, GameRng, HookMode, Score, Time, WorldBounds,
};

/// One play session of the fishing scene
pub struct CatchLoop {
    pub host: Host,
    pub world: World,
    pub mode: HookMode,
    pub score: Score,
    pub events: FrameEvents,
    pub time: Time,
    pub config: Config,
    pub bounds: WorldBounds,
    finished: bool,
}

impl CatchLoop {
    /// Set up the scene with a random fish layout (seeded from the config
    /// when it carries a seed)
    pub fn new(config: Config, host: Host) -> Result<Self, ConfigError> {
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        Self::with_rng(config, host, &mut rng)
    }

    pub fn with_rng(config: Config, host: Host, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let count = {
            use rand::Rng;
            rng.0.gen_range(config.fish_count_min..=config.fish_count_max)
        };
        let fish = (0..count).map(|_| Fish::random(&config, rng)).collect();

        Self::with_fish(config, host, fish)
    }

    /// Set up the scene with an explicit fish layout
    pub fn with_fish(
        config: Config,
        mut host: Host,
        fish: Vec<Fish>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = WorldBounds::new(config.world_width, config.world_height);

        host.body.set_position(config.hook_start());
        host.body.set_allow_gravity(false);
        host.body.set_velocity(glam::Vec2::ZERO);

        if config.follow_hook {
            host.stage.follow_hook();
        }

        let mut y = config.depth_marker_start;
        while y < config.world_height {
            host.stage.add_depth_marker(y, &format!("{}", y as i32));
            y += config.depth_marker_spacing;
        }

        let mut world = World::new();
        for f in fish {
            let entity = world.spawn((f,));
            host.stage.spawn_fish(entity, f.kind, f.pos, f.flip_x);
        }

        let score = Score::new();
        host.stage.set_score_text(&score.label());
        host.scenes.announce_ready(&config.scene_name);

        log::info!(
            "scene {} ready with {} fish in a {}x{} world",
            config.scene_name,
            world.len(),
            bounds.width,
            bounds.height
        );

        Ok(Self {
            host,
            world,
            mode: HookMode::Dragging,
            score,
            events: FrameEvents::new(),
            time: Time::default(),
            config,
            bounds,
            finished: false,
        })
    }

    /// Feed a pointer event from the host
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.finished {
            return;
        }
        apply_pointer(&mut self.mode, self.host.body.as_mut(), event, &self.config);
    }

    /// Run one rendered frame
    pub fn update(&mut self, frame_dt: f32) -> &FrameEvents {
        self.events.clear();
        if self.finished {
            return &self.events;
        }

        // Non-finite deltas count as a zero-length frame
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };
        self.time.advance(dt);

        // Host physics runs ahead of the scene update
        self.host.body.step(dt);

        if !self.config.follow_hook {
            self.host.stage.scroll_camera_y(self.config.camera_drift);
        }

        // 1-2. Swim fish and turn them at the edges
        move_fish(&mut self.world, &self.bounds, self.config.fish_dt);
        for (entity, fish) in self.world.query::<&Fish>().iter() {
            self.host.stage.move_fish(entity, fish.pos, fish.flip_x);
        }

        // 3. Hook rules
        let reeling = update_hook(
            &mut self.mode,
            self.host.body.as_mut(),
            &self.bounds,
            &self.config,
            &mut self.events,
        );

        // 4. Catch only on the way up
        if reeling {
            let hook_bounds = self.host.body.bounds();
            check_catches(
                &mut self.world,
                &hook_bounds,
                &mut self.score,
                &mut self.events,
            );
            for &entity in &self.events.caught {
                self.host.stage.remove_fish(entity);
                self.host.stage.set_score_text(&self.score.label());
                self.host.audio.play(Sound::Catch);
                log::debug!("caught {:?}, score {}", entity, self.score.caught);
            }
        }

        &self.events
    }

    /// End the scene and hand over to the next one
    pub fn change_scene(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.world.clear();
        self.host.stage.clear();
        self.host.scenes.start(&self.config.next_scene);
        log::info!(
            "scene {} finished with {} caught, starting {}",
            self.config.scene_name,
            self.score.caught,
            self.config.next_scene
        );
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fish still swimming
    pub fn fish_remaining(&self) -> u32 {
        self.world.len()
    }
}
