use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Rectangle overlap test; touching edges count as overlapping
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Fixed play area, `(0, 0)` to `(width, height)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when `x` lies past the left or right edge
    pub fn outside_x(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    /// Clamp a centre X so an entity of the given half width stays inside
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        x.clamp(half_width, self.width - half_width)
    }

    /// Clamp a centre Y so an entity of the given half height stays inside
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(half_height, self.height - half_height)
    }

    /// Whether an entity centred at `y` rests on the floor
    pub fn at_bottom(&self, y: f32, half_height: f32) -> bool {
        y >= self.height - half_height
    }

    /// Whether an entity centred at `y` touches the ceiling
    pub fn at_top(&self, y: f32, half_height: f32) -> bool {
        y <= half_height
    }
}
