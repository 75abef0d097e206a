//! Browser client for the fishing scene
//!
//! Canvas 2D rendering, `<audio>` sound effects and pointer input around
//! the engine-free catch loop. JavaScript owns the animation frame loop and
//! DOM listeners and forwards them here.
//!
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod input;
mod scenes;
mod stage;

use std::cell::RefCell;
use std::rc::Rc;

use audio::HtmlAudio;
use catch_core::*;
use glam::Vec2;
use scenes::JsSceneDirector;
use stage::{CanvasStage, Images};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already initialized"));
    }
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One running fishing scene bound to a canvas
#[wasm_bindgen]
pub struct FishingGame {
    game: CatchLoop,
    body: Rc<RefCell<ArcadeBody>>,
    stage: Rc<RefCell<CanvasStage>>,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl FishingGame {
    /// Build the scene. `on_scene(kind, name)` receives `"ready"` and
    /// `"start"` events; `config_json` overrides tuning defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        on_scene: js_sys::Function,
        config_json: Option<String>,
    ) -> Result<FishingGame, JsValue> {
        let mut config = match config_json {
            Some(json) => Config::from_json(&json).map_err(to_js)?,
            None => Config::new(),
        };
        // The world is the canvas
        config.world_width = canvas.width() as f32;
        config.world_height = canvas.height() as f32;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let size = Vec2::new(config.world_width, config.world_height);
        let stage = Rc::new(RefCell::new(CanvasStage::new(
            ctx,
            Images::load()?,
            Camera::new(size, size),
        )));

        let bounds = WorldBounds::new(config.world_width, config.world_height);
        let body = Rc::new(RefCell::new(ArcadeBody::new(
            config.hook_start(),
            config.hook_size,
            config.gravity,
            bounds,
        )));

        let host = Host {
            body: Box::new(body.clone()),
            stage: Box::new(stage.clone()),
            audio: Box::new(HtmlAudio::load()?),
            scenes: Box::new(JsSceneDirector::new(on_scene)),
        };
        let game = CatchLoop::new(config, host).map_err(to_js)?;

        log::info!("fishing scene created on {}x{} canvas", size.x, size.y);

        Ok(Self {
            game,
            body,
            stage,
            canvas,
        })
    }

    /// Pointer moved, in client (CSS pixel) coordinates
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let event = input::pointer_move(&self.canvas, client_x, client_y);
        self.game.handle_pointer(event);
    }

    pub fn pointer_down(&mut self) {
        self.game.handle_pointer(PointerEvent::Down);
    }

    pub fn pointer_up(&mut self) {
        self.game.handle_pointer(PointerEvent::Up);
    }

    /// Advance and redraw; `dt` in seconds since the previous frame
    pub fn frame(&mut self, dt: f32) -> Result<(), JsValue> {
        if self.game.is_finished() {
            return Ok(());
        }
        self.game.update(dt);

        let (hook_pos, hook_size) = {
            let body = self.body.borrow();
            (body.pos, body.size)
        };
        let mut stage = self.stage.borrow_mut();
        stage.camera.follow(hook_pos);
        stage.draw(hook_pos, hook_size)
    }

    /// Leave for the next scene
    pub fn change_scene(&mut self) {
        self.game.change_scene();
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.score.caught
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.game.is_finished()
    }
}
