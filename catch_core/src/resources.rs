use hecs::Entity;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    /// Advance by one frame
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

/// Catch counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub caught: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.caught += 1;
    }

    /// Text shown in the score overlay
    pub fn label(&self) -> String {
        format!("Caught: {}", self.caught)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise from OS entropy
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct FrameEvents {
    pub caught: Vec<Entity>,
    pub return_started: bool,
    pub hook_surfaced: bool,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.caught.clear();
        self.return_started = false;
        self.hook_surfaced = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.caught, 0);
        score.increment();
        score.increment();
        assert_eq!(score.caught, 2);
    }

    #[test]
    fn test_score_label() {
        let mut score = Score::new();
        assert_eq!(score.label(), "Caught: 0");
        for _ in 0..3 {
            score.increment();
        }
        assert_eq!(score.label(), "Caught: 3");
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 0.75);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::from_seed_or_entropy(Some(99));
        let mut b = GameRng::new(99);
        assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
    }

    #[test]
    fn test_frame_events_clear() {
        let mut events = FrameEvents::new();
        events.caught.push(Entity::DANGLING);
        events.return_started = true;
        events.hook_surfaced = true;

        events.clear();

        assert!(events.caught.is_empty());
        assert!(!events.return_started);
        assert!(!events.hook_surfaced);
    }
}
