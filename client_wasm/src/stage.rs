//! Canvas 2D stage
//!
//! Retained sprite list the catch loop edits, redrawn every frame.

use std::collections::HashMap;

use catch_core::{Camera, FishKind, Stage};
use glam::Vec2;
use hecs::Entity;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

const BACKGROUND: &str = "underwater_bg";
const HOOK: &str = "hook";
const TEXT_COLOR: &str = "#000000";

/// Images keyed by texture name, loaded from `assets/<key>.png`
pub struct Images(HashMap<&'static str, HtmlImageElement>);

impl Images {
    pub fn load() -> Result<Self, JsValue> {
        let mut images = HashMap::new();
        let keys = [BACKGROUND, HOOK]
            .into_iter()
            .chain(FishKind::ALL.iter().map(|kind| kind.key()));
        for key in keys {
            let img = HtmlImageElement::new()?;
            img.set_src(&format!("assets/{}.png", key));
            images.insert(key, img);
        }
        Ok(Self(images))
    }

    /// Image ready to draw, if it has finished loading
    fn get(&self, key: &str) -> Option<&HtmlImageElement> {
        self.0.get(key).filter(|img| img.complete())
    }
}

#[derive(Debug, Clone, Copy)]
struct FishSprite {
    kind: FishKind,
    pos: Vec2,
    flip_x: bool,
}

pub struct CanvasStage {
    ctx: CanvasRenderingContext2d,
    images: Images,
    fish: HashMap<Entity, FishSprite>,
    markers: Vec<(f32, String)>,
    score_text: String,
    pub camera: Camera,
}

impl CanvasStage {
    pub fn new(ctx: CanvasRenderingContext2d, images: Images, camera: Camera) -> Self {
        Self {
            ctx,
            images,
            fish: HashMap::new(),
            markers: Vec::new(),
            score_text: String::new(),
            camera,
        }
    }

    /// Redraw the whole scene
    pub fn draw(&self, hook_pos: Vec2, hook_size: f32) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let view = self.camera.viewport;
        ctx.clear_rect(0.0, 0.0, view.x as f64, view.y as f64);

        if let Some(bg) = self.images.get(BACKGROUND) {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                bg,
                0.0,
                0.0,
                view.x as f64,
                view.y as f64,
            )?;
        }

        ctx.save();
        let scroll = self.camera.scroll;
        ctx.translate(-scroll.x as f64, -scroll.y as f64)?;

        // Depth markers
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("16px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let marker_x = (self.camera.world.x / 2.0) as f64;
        for (y, label) in &self.markers {
            ctx.fill_text(label, marker_x, *y as f64)?;
        }

        // Fish, then the hook on top
        for sprite in self.fish.values() {
            self.draw_sprite(sprite.kind.key(), sprite.pos, sprite.kind.size(), sprite.flip_x)?;
        }
        self.draw_sprite(HOOK, hook_pos, Vec2::splat(hook_size), false)?;

        ctx.restore();

        // Score overlay ignores the camera
        ctx.set_font("32px Arial");
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        ctx.fill_text(&self.score_text, 16.0, 16.0)?;

        Ok(())
    }

    fn draw_sprite(&self, key: &str, center: Vec2, size: Vec2, flip_x: bool) -> Result<(), JsValue> {
        let Some(img) = self.images.get(key) else {
            return Ok(());
        };
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(center.x as f64, center.y as f64)?;
        if flip_x {
            ctx.scale(-1.0, 1.0)?;
        }
        let half = size * 0.5;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            -half.x as f64,
            -half.y as f64,
            size.x as f64,
            size.y as f64,
        )?;
        ctx.restore();
        Ok(())
    }
}

impl Stage for CanvasStage {
    fn follow_hook(&mut self) {
        self.camera.following = true;
    }

    fn scroll_camera_y(&mut self, dy: f32) {
        self.camera.scroll_y(dy);
    }

    fn add_depth_marker(&mut self, y: f32, label: &str) {
        self.markers.push((y, label.to_string()));
    }

    fn spawn_fish(&mut self, id: Entity, kind: FishKind, pos: Vec2, flip_x: bool) {
        self.fish.insert(id, FishSprite { kind, pos, flip_x });
    }

    fn move_fish(&mut self, id: Entity, pos: Vec2, flip_x: bool) {
        if let Some(sprite) = self.fish.get_mut(&id) {
            sprite.pos = pos;
            sprite.flip_x = flip_x;
        }
    }

    fn remove_fish(&mut self, id: Entity) {
        self.fish.remove(&id);
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_text = text.to_string();
    }

    fn clear(&mut self) {
        self.fish.clear();
        self.markers.clear();
        self.score_text.clear();
        self.camera.following = false;
    }
}
