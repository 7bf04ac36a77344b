//! Lightbox controller: the full-screen image browser.
//!
//! A `Lightbox` is created when a modal opens and lives until it closes.
//! Its image list is fixed for the whole session. Navigation comes in two
//! flavours that deliberately behave differently:
//!
//! - `next`/`prev` are cyclic and wrap modulo the image count. The on-screen
//!   buttons that call them are inert at the first/last image, so through
//!   the UI they act clamped anyway.
//! - Arrow keys are clamped and never wrap.
//!
//! ```text
//!   Closed ──open──► Open ──Escape / close / backdrop (if allowed)──► Closed
//!                    │  ▲
//!                    └──┘ next, prev, arrows, zoom, image loaded
//! ```

use crate::config::LightboxConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::input::KeyInput;

/// Input to an open lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    /// Resolve per-mount configuration (viewport-dependent behaviour)
    Mount(LightboxConfig),
    /// Cyclic forward step
    Next,
    /// Cyclic backward step
    Prev,
    /// On-screen "next" button; inert on the last image
    NextButton,
    /// On-screen "previous" button; inert on the first image
    PrevButton,
    /// Document-level key press
    Key(KeyInput),
    /// Click on the displayed image
    ToggleZoom,
    /// The image at this index finished loading
    ImageLoaded(usize),
    /// Click outside the image content area
    BackdropClick,
}

/// What the owner of the lightbox should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxOutcome {
    Stay,
    Close,
}

/// Focusable controls inside the modal, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxControl {
    Prev,
    Close,
    Next,
}

/// Direction of a clamped step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

/// State of one open lightbox session
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
    zoomed: bool,
    loaded: bool,
    config: LightboxConfig,
}

impl Lightbox {
    /// Open over `images` at `index`.
    ///
    /// An empty list is refused; an out-of-range index is clamped to the
    /// last image.
    pub fn open(images: Vec<String>, index: usize) -> PortfolioResult<Self> {
        if images.is_empty() {
            return Err(PortfolioError::EmptyGallery);
        }
        let index = index.min(images.len() - 1);
        Ok(Self {
            images,
            index,
            zoomed: false,
            loaded: false,
            config: LightboxConfig::default(),
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.images.len()
    }

    /// URL of the image on screen
    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether the current image has finished loading (hides the skeleton)
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> LightboxConfig {
        self.config
    }

    /// "2 / 5" style position indicator
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.total())
    }

    pub fn alt_text(&self) -> String {
        format!("Screenshot {} of {}", self.index + 1, self.total())
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.total()
    }

    pub fn next(&mut self) {
        self.set_index((self.index + 1) % self.total());
    }

    pub fn prev(&mut self) {
        let total = self.total();
        self.set_index((self.index + total - 1) % total);
    }

    /// Move one image without wrapping; saturates at either end
    pub fn step_clamped(&mut self, step: Step) {
        let target = match step {
            Step::Back => self.index.saturating_sub(1),
            Step::Forward => (self.index + 1).min(self.total() - 1),
        };
        self.set_index(target);
    }

    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
    }

    /// Record that the image at `index` loaded. Late events for an image
    /// that is no longer displayed are ignored.
    pub fn mark_loaded(&mut self, index: usize) {
        if index == self.index {
            self.loaded = true;
        }
    }

    fn set_index(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.zoomed = false;
            self.loaded = false;
        }
    }

    /// Apply one input. Only `Escape` and an allowed backdrop click close.
    pub fn apply(&mut self, action: LightboxAction) -> LightboxOutcome {
        match action {
            LightboxAction::Mount(config) => self.config = config,
            LightboxAction::Next => self.next(),
            LightboxAction::Prev => self.prev(),
            LightboxAction::NextButton => {
                if self.can_next() {
                    self.next();
                }
            }
            LightboxAction::PrevButton => {
                if self.can_prev() {
                    self.prev();
                }
            }
            LightboxAction::Key(KeyInput::Escape) => return LightboxOutcome::Close,
            LightboxAction::Key(KeyInput::ArrowLeft) => self.step_clamped(Step::Back),
            LightboxAction::Key(KeyInput::ArrowRight) => self.step_clamped(Step::Forward),
            LightboxAction::Key(_) => {}
            LightboxAction::ToggleZoom => self.toggle_zoom(),
            LightboxAction::ImageLoaded(index) => self.mark_loaded(index),
            LightboxAction::BackdropClick => {
                if self.config.close_on_backdrop {
                    return LightboxOutcome::Close;
                }
            }
        }
        LightboxOutcome::Stay
    }

    /// Enabled controls in document order; disabled buttons cannot hold focus
    pub fn focusable_controls(&self) -> Vec<LightboxControl> {
        let mut controls = Vec::with_capacity(3);
        if self.can_prev() {
            controls.push(LightboxControl::Prev);
        }
        controls.push(LightboxControl::Close);
        if self.can_next() {
            controls.push(LightboxControl::Next);
        }
        controls
    }

    /// Control that receives focus when the modal mounts
    pub fn initial_focus(&self) -> LightboxControl {
        self.focusable_controls()[0]
    }

    /// Focus target for Tab (or Shift+Tab when `backwards`), wrapping so
    /// focus never leaves the modal.
    pub fn cycle_focus(&self, from: Option<LightboxControl>, backwards: bool) -> LightboxControl {
        let controls = self.focusable_controls();
        let len = controls.len();
        let position = from.and_then(|c| controls.iter().position(|x| *x == c));
        let target = match (position, backwards) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };
        controls[target]
    }
}

/// Saved document scroll offset while a modal blocks page scrolling.
///
/// Acquired on modal mount, released on unmount; release hands back the
/// exact offset captured at mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    saved: Option<f64>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `offset`. Returns false if the lock is already held, in
    /// which case the first captured offset is kept.
    pub fn acquire(&mut self, offset: f64) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(offset);
        true
    }

    /// Offset to restore, or `None` if nothing was held
    pub fn release(&mut self) -> Option<f64> {
        self.saved.take()
    }

    pub fn is_held(&self) -> bool {
        self.saved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}.jpg")).collect()
    }

    #[test]
    fn empty_gallery_is_refused() {
        assert!(matches!(
            Lightbox::open(vec![], 0),
            Err(PortfolioError::EmptyGallery)
        ));
    }

    #[test]
    fn start_index_is_clamped() {
        let lb = Lightbox::open(images(3), 10).unwrap();
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn cyclic_navigation_wraps() {
        let mut lb = Lightbox::open(images(3), 2).unwrap();
        lb.next();
        assert_eq!(lb.index(), 0);
        lb.prev();
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn arrow_keys_saturate() {
        let mut lb = Lightbox::open(images(3), 0).unwrap();
        lb.apply(LightboxAction::Key(KeyInput::ArrowLeft));
        assert_eq!(lb.index(), 0);
        lb.apply(LightboxAction::Key(KeyInput::ArrowRight));
        lb.apply(LightboxAction::Key(KeyInput::ArrowRight));
        lb.apply(LightboxAction::Key(KeyInput::ArrowRight));
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn buttons_are_inert_at_edges() {
        let mut lb = Lightbox::open(images(3), 0).unwrap();
        assert!(!lb.can_prev());
        lb.apply(LightboxAction::PrevButton);
        assert_eq!(lb.index(), 0);

        let mut lb = Lightbox::open(images(3), 2).unwrap();
        assert!(!lb.can_next());
        lb.apply(LightboxAction::NextButton);
        assert_eq!(lb.index(), 2);
        lb.apply(LightboxAction::PrevButton);
        assert_eq!(lb.index(), 1);
    }

    #[test]
    fn index_change_resets_zoom_and_loaded() {
        let mut lb = Lightbox::open(images(2), 0).unwrap();
        lb.apply(LightboxAction::ImageLoaded(0));
        lb.apply(LightboxAction::ToggleZoom);
        assert!(lb.is_loaded());
        assert!(lb.is_zoomed());

        lb.apply(LightboxAction::Next);
        assert!(!lb.is_loaded());
        assert!(!lb.is_zoomed());
    }

    #[test]
    fn single_image_wrap_keeps_state() {
        let mut lb = Lightbox::open(images(1), 0).unwrap();
        lb.toggle_zoom();
        lb.next();
        assert_eq!(lb.index(), 0);
        assert!(lb.is_zoomed());
    }

    #[test]
    fn stale_load_event_is_ignored() {
        let mut lb = Lightbox::open(images(3), 0).unwrap();
        lb.next();
        lb.apply(LightboxAction::ImageLoaded(0));
        assert!(!lb.is_loaded());
        lb.apply(LightboxAction::ImageLoaded(1));
        assert!(lb.is_loaded());
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut lb = Lightbox::open(images(2), 0).unwrap();
        assert_eq!(lb.apply(LightboxAction::Key(KeyInput::Enter)), LightboxOutcome::Stay);
        assert_eq!(lb.apply(LightboxAction::Key(KeyInput::Escape)), LightboxOutcome::Close);
    }

    #[test]
    fn backdrop_click_respects_mount_config() {
        let mut lb = Lightbox::open(images(2), 0).unwrap();
        lb.apply(LightboxAction::Mount(LightboxConfig {
            close_on_backdrop: false,
        }));
        assert_eq!(lb.apply(LightboxAction::BackdropClick), LightboxOutcome::Stay);

        lb.apply(LightboxAction::Mount(LightboxConfig {
            close_on_backdrop: true,
        }));
        assert_eq!(lb.apply(LightboxAction::BackdropClick), LightboxOutcome::Close);
    }

    #[test]
    fn backdrop_click_ignored_before_mount() {
        let mut lb = Lightbox::open(images(2), 0).unwrap();
        assert!(!lb.config().close_on_backdrop);
        assert_eq!(lb.apply(LightboxAction::BackdropClick), LightboxOutcome::Stay);
    }

    #[test]
    fn counter_and_alt_text() {
        let lb = Lightbox::open(images(5), 1).unwrap();
        assert_eq!(lb.counter(), "2 / 5");
        assert_eq!(lb.alt_text(), "Screenshot 2 of 5");
        assert_eq!(lb.current(), "img-1.jpg");
    }

    #[test]
    fn focus_starts_at_first_enabled_control() {
        let lb = Lightbox::open(images(3), 0).unwrap();
        assert_eq!(lb.initial_focus(), LightboxControl::Close);
        let lb = Lightbox::open(images(3), 1).unwrap();
        assert_eq!(lb.initial_focus(), LightboxControl::Prev);
    }

    #[test]
    fn focus_cycles_within_modal() {
        let lb = Lightbox::open(images(3), 1).unwrap();
        let next = lb.cycle_focus(Some(LightboxControl::Next), false);
        assert_eq!(next, LightboxControl::Prev);
        let back = lb.cycle_focus(Some(LightboxControl::Prev), true);
        assert_eq!(back, LightboxControl::Next);

        let single = Lightbox::open(images(1), 0).unwrap();
        assert_eq!(single.cycle_focus(Some(LightboxControl::Close), false), LightboxControl::Close);
        assert_eq!(single.cycle_focus(None, true), LightboxControl::Close);
    }

    #[test]
    fn scroll_lock_restores_exact_offset_once() {
        let mut lock = ScrollLock::new();
        assert!(lock.acquire(1234.5));
        assert!(!lock.acquire(10.0));
        assert!(lock.is_held());
        assert_eq!(lock.release(), Some(1234.5));
        assert_eq!(lock.release(), None);
    }
}
