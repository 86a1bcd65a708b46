//! The collapsible pane state machine.
//!
//! A [`Pane`] ties the toggle header, the content viewport and the height
//! animation together. The host drives it from its UI thread: it forwards
//! header clicks to [`Pane::toggle`], reports measured heights, and calls
//! [`Pane::advance`] once per frame while [`Pane::is_animating`] is true.
//!
//! Content replaced while the pane is at rest snaps to the new height. Only
//! toggles animate.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use uuid::Uuid;

use crate::animation::{Direction, Easing, HeightAnimation, HeightBounds, Track};
use crate::config::PaneConfig;
use crate::error::PaneResult;
use crate::header::{FoldState, Indicator, ToggleHeader};
use crate::viewport::{ContentChange, ContentViewport, PaneContent};

/// Unique identifier for a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(Uuid);

impl PaneId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Heights the pane reports to its host layout for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneHeights {
    /// Minimum height of the whole pane.
    pub minimum: f32,
    /// Maximum height of the whole pane.
    pub maximum: f32,
    /// Visible height of the content viewport.
    pub viewport: f32,
}

type ToggleListener = Box<dyn FnMut(bool)>;

/// A collapsible pane with an animated expand/collapse transition.
pub struct Pane<C: ?Sized = dyn PaneContent> {
    id: PaneId,
    header: ToggleHeader,
    viewport: ContentViewport<C>,
    animation: HeightAnimation,
    /// Measured natural height of the header.
    header_height: f32,
    reduced_motion: bool,
    listeners: Vec<ToggleListener>,
}

impl<C: PaneContent + ?Sized> Pane<C> {
    /// Create a collapsed pane with default settings.
    pub fn new(title: impl Into<String>, animation_duration_ms: u64) -> PaneResult<Self> {
        Self::from_config(PaneConfig::new(title, animation_duration_ms))
    }

    /// Create a pane from a validated configuration.
    pub fn from_config(config: PaneConfig) -> PaneResult<Self> {
        config.validate()?;

        let mut animation = HeightAnimation::new(config.animation_duration(), config.easing)?;
        animation.set_bounds(HeightBounds::empty(config.header_height));

        let mut header = ToggleHeader::new(config.title);
        if config.start_expanded {
            header.set_checked(true);
            animation.jump_to(Direction::Forward);
        }

        Ok(Self {
            id: PaneId::new(),
            header,
            viewport: ContentViewport::new(),
            animation,
            header_height: config.header_height,
            reduced_motion: false,
            listeners: Vec::new(),
        })
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.header.title()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.header.set_title(title);
    }

    pub fn header(&self) -> &ToggleHeader {
        &self.header
    }

    pub fn state(&self) -> FoldState {
        self.header.state()
    }

    pub fn is_expanded(&self) -> bool {
        self.header.is_checked()
    }

    pub fn indicator(&self) -> Indicator {
        self.header.indicator()
    }

    pub fn animation(&self) -> &HeightAnimation {
        &self.animation
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation.duration()
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.animation.set_easing(easing);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// When enabled, toggles land on their end state immediately.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled && self.animation.is_running() {
            self.animation.finish();
            self.sync_viewport();
        }
    }

    /// Register a listener for `toggled(expanded)` notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flip the fold state, as a click on the header does. Returns the new
    /// expanded flag.
    pub fn toggle(&mut self) -> bool {
        let expanded = self.header.toggle().is_expanded();
        self.on_toggled(expanded);
        expanded
    }

    /// Set the fold state programmatically. Notifies and animates only when
    /// the state changes.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.header.set_checked(expanded) {
            self.on_toggled(expanded);
        }
    }

    fn on_toggled(&mut self, expanded: bool) {
        log::debug!("Pane {:?} toggled, expanded={}", self.header.title(), expanded);
        for listener in &mut self.listeners {
            listener(expanded);
        }

        let direction = Direction::towards(expanded);
        if !self.viewport.has_content() {
            self.animation.set_bounds(HeightBounds::empty(self.header_height));
            self.animation.jump_to(direction);
            self.viewport.set_visible_height(0.0);
            return;
        }

        self.animation.set_bounds(self.measure());
        self.animation.play(direction);
        if self.reduced_motion {
            self.animation.finish();
        }
        self.sync_viewport();
    }

    /// The attached content, if any.
    pub fn content(&self) -> Option<&Rc<C>> {
        self.viewport.content()
    }

    /// Attach content, releasing the previous unit.
    ///
    /// Re-attaching the current unit is a no-op. New bounds are stored
    /// right away; at rest the viewport snaps to them, mid-animation the
    /// transition continues toward its target with the new heights.
    pub fn set_content(&mut self, content: Rc<C>) -> ContentChange {
        let change = self.viewport.set_content(content);
        match change {
            ContentChange::Unchanged => return change,
            ContentChange::Replaced => {
                log::debug!("Pane {:?} released previous content", self.header.title())
            }
            ContentChange::Attached => {}
        }
        self.apply_bounds();
        change
    }

    /// Dispose the content and close the viewport. Returns whether any
    /// content was attached.
    pub fn clear_content(&mut self) -> bool {
        self.take_content().is_some()
    }

    /// Detach the content and hand it back without disposing it.
    pub fn take_content(&mut self) -> Option<Rc<C>> {
        let content = self.viewport.take();
        if content.is_some() {
            log::debug!("Pane {:?} content cleared", self.header.title());
        }
        self.animation.set_bounds(HeightBounds::empty(self.header_height));
        self.animation.jump_to(Direction::towards(self.is_expanded()));
        self.sync_viewport();
        content
    }

    /// Natural height of the content, 0 with no content.
    pub fn content_height(&self) -> f32 {
        self.viewport.natural_height()
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Report the header's measured natural height.
    pub fn set_header_height(&mut self, height: f32) {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        if height != self.header_height {
            self.header_height = height;
            self.apply_bounds();
        }
    }

    /// Re-measure the content after its natural height may have changed.
    /// Returns whether the stored bounds changed.
    pub fn refresh_content_height(&mut self) -> bool {
        let bounds = self.measure();
        if bounds == self.animation.bounds() {
            return false;
        }
        log::debug!(
            "Pane {:?} content height {} -> {}",
            self.header.title(),
            self.animation.bounds().content,
            bounds.content
        );
        self.apply_bounds();
        true
    }

    /// Host frame callback. Returns whether another frame is needed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let running = self.animation.advance(dt);
        self.sync_viewport();
        running
    }

    /// Heights for the current frame.
    pub fn heights(&self) -> PaneHeights {
        PaneHeights {
            minimum: self.animation.value(Track::PaneMinimum),
            maximum: self.animation.value(Track::PaneMaximum),
            viewport: self.viewport.visible_height(),
        }
    }

    fn measure(&self) -> HeightBounds {
        HeightBounds::new(self.header_height, self.viewport.natural_height())
    }

    fn apply_bounds(&mut self) {
        self.animation.set_bounds(self.measure());
        if !self.animation.is_running() {
            self.animation.jump_to(Direction::towards(self.is_expanded()));
        }
        self.sync_viewport();
    }

    fn sync_viewport(&mut self) {
        self.viewport.set_visible_height(self.animation.value(Track::Viewport));
    }
}
