//! Sound effects through `<audio>` elements

use std::collections::HashMap;

use catch_core::{Audio, Sound};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

pub struct HtmlAudio {
    clips: HashMap<&'static str, HtmlAudioElement>,
}

impl HtmlAudio {
    /// Load every sound from `assets/<key>.mp3`
    pub fn load() -> Result<Self, JsValue> {
        let mut clips = HashMap::new();
        for sound in [Sound::Catch] {
            let key = sound.key();
            let clip = HtmlAudioElement::new_with_src(&format!("assets/{}.mp3", key))?;
            clips.insert(key, clip);
        }
        Ok(Self { clips })
    }
}

impl Audio for HtmlAudio {
    fn play(&mut self, sound: Sound) {
        let Some(clip) = self.clips.get(sound.key()) else {
            log::warn!("no clip loaded for {:?}", sound);
            return;
        };
        // Restart so rapid catches each get a sound
        clip.set_current_time(0.0);
        if let Err(e) = clip.play() {
            log::warn!("failed to play {}: {:?}", sound.key(), e);
        }
    }
}
