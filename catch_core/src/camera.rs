//! Scrolling view over the play area
//!
//! Either tracks the hook or drifts downward a little every frame. Hosts
//! read `scroll` as the world-space offset of the top-left screen corner.

use glam::Vec2;

pub struct Camera {
    pub viewport: Vec2,
    pub world: Vec2,
    pub scroll: Vec2,
    pub following: bool,
}

impl Camera {
    pub fn new(viewport: Vec2, world: Vec2) -> Self {
        Self {
            viewport,
            world,
            scroll: Vec2::ZERO,
            following: false,
        }
    }

    /// Centre on `target`, never showing anything outside the world
    pub fn follow(&mut self, target: Vec2) {
        if !self.following {
            return;
        }
        let max = (self.world - self.viewport).max(Vec2::ZERO);
        self.scroll = (target - self.viewport * 0.5).clamp(Vec2::ZERO, max);
    }

    pub fn scroll_y(&mut self, dy: f32) {
        self.scroll.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_clamps_to_world() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0));
        camera.following = true;

        camera.follow(Vec2::new(10.0, 10.0));
        assert_eq!(camera.scroll, Vec2::ZERO);

        camera.follow(Vec2::new(150.0, 290.0));
        assert_eq!(camera.scroll, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_world_equal_to_viewport_never_scrolls() {
        let mut camera = Camera::new(Vec2::new(1024.0, 768.0), Vec2::new(1024.0, 768.0));
        camera.following = true;
        camera.follow(Vec2::new(900.0, 700.0));
        assert_eq!(camera.scroll, Vec2::ZERO);
    }

    #[test]
    fn test_drift_when_not_following() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));
        camera.follow(Vec2::new(50.0, 50.0));
        camera.scroll_y(1.0);
        camera.scroll_y(1.0);
        assert_eq!(camera.scroll, Vec2::new(0.0, 2.0));
    }
}
