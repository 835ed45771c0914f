//! Full-screen media lightbox with wrapping prev/next navigation.
//!
//! Three entry modes: a multi-image gallery, a single-image view (no
//! navigation chrome) and a video view. The layout is right-to-left, so the
//! arrow keys map to *visual* reading order rather than numeric index order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub kind: MediaKind,
    pub source: String,
}

impl GalleryItem {
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source: source.into(),
        }
    }

    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxMode {
    SingleImage,
    MultiImage,
    Video,
}

/// Keys the widget reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    items: Vec<GalleryItem>,
    index: usize,
    title: Option<String>,
    mode: Option<LightboxMode>,
    video_playing: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<LightboxMode> {
        self.mode
    }

    /// Opens the gallery view over `items`, skipping entries with a blank
    /// source. Opening with nothing usable is a no-op.
    pub fn open_gallery(&mut self, items: Vec<GalleryItem>, title: Option<String>) {
        let items: Vec<GalleryItem> = items
            .into_iter()
            .filter(|item| !item.source.trim().is_empty())
            .collect();
        if items.is_empty() {
            tracing::debug!("gallery opened with no usable items");
            return;
        }
        self.mode = Some(if items.len() == 1 {
            LightboxMode::SingleImage
        } else {
            LightboxMode::MultiImage
        });
        self.items = items;
        self.index = 0;
        self.title = title;
        self.video_playing = false;
    }

    /// Opens a single video. Navigation, counter and title stay hidden and
    /// the video is loaded but not autoplayed.
    pub fn open_video(&mut self, source: &str) {
        if source.trim().is_empty() {
            tracing::debug!("video lightbox opened without a source");
            return;
        }
        self.mode = Some(LightboxMode::Video);
        self.items = vec![GalleryItem::video(source)];
        self.index = 0;
        self.title = None;
        self.video_playing = false;
    }

    pub fn play_video(&mut self) {
        if self.mode == Some(LightboxMode::Video) {
            self.video_playing = true;
        }
    }

    pub fn video_playing(&self) -> bool {
        self.video_playing
    }

    /// Clears all state; any playing video stops at position zero.
    pub fn close(&mut self) {
        self.items.clear();
        self.index = 0;
        self.title = None;
        self.mode = None;
        self.video_playing = false;
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Gallery title; the video view never shows one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Prev/next controls and the counter only appear when there is more
    /// than one item to move between.
    pub fn controls_visible(&self) -> bool {
        self.can_navigate()
    }

    pub fn counter_text(&self) -> Option<String> {
        if self.can_navigate() {
            Some(format!("{} / {}", self.index + 1, self.items.len()))
        } else {
            None
        }
    }

    fn can_navigate(&self) -> bool {
        self.mode == Some(LightboxMode::MultiImage) && self.items.len() > 1
    }

    /// Moves to the numerically next item, wrapping. Returns whether a
    /// re-render is needed.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.index = (self.index + 1) % self.items.len();
        true
    }

    /// Moves to the numerically previous item, wrapping.
    pub fn prev(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.index = (self.index + self.items.len() - 1) % self.items.len();
        true
    }

    /// Keyboard contract while open: Escape closes, arrows navigate in
    /// visual order. In the RTL layout the right arrow points at the
    /// visually next item, which is the numerically previous one.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => {
                self.close();
                true
            }
            Key::ArrowRight => self.prev(),
            Key::ArrowLeft => self.next(),
        }
    }

    /// A click on the backdrop closes the widget; clicks on the content
    /// area do not propagate.
    pub fn backdrop_click(&mut self) -> bool {
        if self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Vec<GalleryItem> {
        (0..n).map(|i| GalleryItem::image(format!("img-{}.jpg", i))).collect()
    }

    #[test]
    fn open_gallery_starts_at_first_item() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(3), Some("Studio".to_string()));
        assert_eq!(lb.mode(), Some(LightboxMode::MultiImage));
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.title(), Some("Studio"));
        assert_eq!(lb.counter_text().as_deref(), Some("1 / 3"));
    }

    #[test]
    fn repeated_next_cycles_back_to_start() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(5), None);
        lb.next();
        lb.next();
        let start = lb.index();
        for _ in 0..5 {
            assert!(lb.next());
        }
        assert_eq!(lb.index(), start);
    }

    #[test]
    fn prev_then_next_returns_to_the_same_item() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(4), None);
        lb.next();
        let start = lb.index();
        lb.prev();
        lb.next();
        assert_eq!(lb.index(), start);
        lb.next();
        lb.prev();
        assert_eq!(lb.index(), start);
    }

    #[test]
    fn prev_wraps_from_the_first_item() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(3), None);
        assert!(lb.prev());
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn single_item_gallery_hides_navigation() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(1), None);
        assert_eq!(lb.mode(), Some(LightboxMode::SingleImage));
        assert!(!lb.controls_visible());
        assert_eq!(lb.counter_text(), None);
        assert!(!lb.next());
        assert!(!lb.prev());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn video_mode_ignores_navigation() {
        let mut lb = Lightbox::new();
        lb.open_video("clip.mp4");
        assert_eq!(lb.mode(), Some(LightboxMode::Video));
        assert_eq!(lb.title(), None);
        assert_eq!(lb.counter_text(), None);
        assert!(!lb.next());
        assert!(!lb.prev());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn video_does_not_autoplay_and_stops_on_close() {
        let mut lb = Lightbox::new();
        lb.open_video("clip.mp4");
        assert!(!lb.video_playing());
        lb.play_video();
        assert!(lb.video_playing());
        lb.close();
        assert!(!lb.video_playing());
        assert!(!lb.is_open());
    }

    #[test]
    fn blank_sources_are_skipped() {
        let mut lb = Lightbox::new();
        lb.open_gallery(
            vec![
                GalleryItem::image(""),
                GalleryItem::image("ok.jpg"),
                GalleryItem::image("   "),
            ],
            None,
        );
        assert_eq!(lb.mode(), Some(LightboxMode::SingleImage));
        assert_eq!(lb.current().unwrap().source, "ok.jpg");
    }

    #[test]
    fn opening_with_nothing_usable_is_a_no_op() {
        let mut lb = Lightbox::new();
        lb.open_gallery(vec![GalleryItem::image("")], None);
        assert!(!lb.is_open());
        lb.open_video("  ");
        assert!(!lb.is_open());
    }

    #[test]
    fn arrow_keys_follow_visual_rtl_order() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(3), None);
        // Visually-next in RTL reading order is the numerically previous item.
        assert!(lb.handle_key(Key::ArrowRight));
        assert_eq!(lb.index(), 2);
        assert!(lb.handle_key(Key::ArrowLeft));
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lb = Lightbox::new();
        assert!(!lb.handle_key(Key::Escape));
        assert!(!lb.handle_key(Key::ArrowLeft));
    }

    #[test]
    fn escape_and_backdrop_click_close() {
        let mut lb = Lightbox::new();
        lb.open_gallery(gallery(2), None);
        assert!(lb.handle_key(Key::Escape));
        assert!(!lb.is_open());
        assert_eq!(lb.current(), None);

        lb.open_gallery(gallery(2), None);
        assert!(lb.backdrop_click());
        assert!(!lb.is_open());
    }
}
