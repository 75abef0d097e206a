/// Game tuning parameters for the catch loop
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // World (matches the default canvas)
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 768.0;

    // Hook
    pub const HOOK_START_X: f32 = 16.0;
    pub const HOOK_START_Y: f32 = 16.0;
    pub const HOOK_SIZE: f32 = 32.0;
    pub const GRAVITY: f32 = 300.0; // px/s² while falling
    pub const ASCENT_SPEED: f32 = 300.0; // px/s while reeling in

    // Fish
    pub const FISH_COUNT_MIN: u32 = 5;
    pub const FISH_COUNT_MAX: u32 = 15;
    pub const FISH_SPEED_MIN: u32 = 50;
    pub const FISH_SPEED_MAX: u32 = 100;
    pub const FISH_SPAWN_MARGIN: f32 = 50.0;

    // Depth markers
    pub const DEPTH_MARKER_START: f32 = 50.0;
    pub const DEPTH_MARKER_SPACING: f32 = 100.0;

    // Camera
    pub const CAMERA_DRIFT: f32 = 1.0; // px per frame when not following

    // Timing
    pub const FISH_DT: f32 = 1.0 / 60.0; // Fish always advance by a nominal frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    // Scenes
    pub const SCENE_NAME: &'static str = "Game";
    pub const NEXT_SCENE: &'static str = "GameOver";
}
