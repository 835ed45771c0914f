//! Hover preview for recipe-card and gallery videos: play while the pointer
//! is over the card, rewind to the start when it leaves.

#[derive(Debug, Default)]
pub struct HoverPreview {
    playing: bool,
    position: f32,
}

impl HoverPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self) {
        self.playing = true;
    }

    /// Pauses and rewinds to position zero.
    pub fn pointer_leave(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    /// Advances playback by `dt` seconds while playing.
    pub fn advance(&mut self, dt: f32) {
        if self.playing {
            self.position += dt;
        }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}
