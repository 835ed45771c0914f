//! Interaction-layer state machines for the brochure site.
//!
//! Each widget owns its state behind a component constructed per page load;
//! rendering and DOM wiring stay on the frontend side, which drives these
//! types through the operations they expose.

pub mod widgets {
    pub mod accordion;
    pub mod lightbox;
    pub mod overlay;
    pub mod preview;
    pub mod ticker;
}
