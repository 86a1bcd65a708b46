//! Content viewport: holds the pane's single content unit.

use std::rc::Rc;

/// A displayable unit placed inside a pane.
pub trait PaneContent {
    /// Unconstrained preferred height, as measured by the host toolkit.
    fn natural_height(&self) -> f32;
}

/// Outcome of [`ContentViewport::set_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChange {
    /// The same unit was already attached.
    Unchanged,
    /// Content attached to an empty viewport.
    Attached,
    /// Previous content was released and replaced.
    Replaced,
}

/// Clipping container for at most one content unit.
///
/// The visible height is written by the pane after every animation step and
/// is always within `[0, natural_height()]`.
pub struct ContentViewport<C: ?Sized> {
    content: Option<Rc<C>>,
    visible_height: f32,
}

impl<C: PaneContent + ?Sized> ContentViewport<C> {
    pub fn new() -> Self {
        Self {
            content: None,
            visible_height: 0.0,
        }
    }

    pub fn content(&self) -> Option<&Rc<C>> {
        self.content.as_ref()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Attach `content`. Identity is by reference: re-attaching the current
    /// unit does nothing. The previous unit is dropped.
    pub fn set_content(&mut self, content: Rc<C>) -> ContentChange {
        let change = match &self.content {
            Some(current) if Rc::ptr_eq(current, &content) => return ContentChange::Unchanged,
            Some(_) => ContentChange::Replaced,
            None => ContentChange::Attached,
        };
        self.content = Some(content);
        change
    }

    /// Detach and return the content without dropping it.
    pub fn take(&mut self) -> Option<Rc<C>> {
        self.visible_height = 0.0;
        self.content.take()
    }

    /// Natural height of the content, 0 with no content.
    pub fn natural_height(&self) -> f32 {
        let height = self.content.as_ref().map_or(0.0, |c| c.natural_height());
        if height.is_finite() { height.max(0.0) } else { 0.0 }
    }

    pub fn visible_height(&self) -> f32 {
        self.visible_height
    }

    /// Set the visible height, clamped to `[0, natural_height()]`.
    pub fn set_visible_height(&mut self, height: f32) {
        let height = if height.is_finite() { height } else { 0.0 };
        self.visible_height = height.clamp(0.0, self.natural_height());
    }
}

impl<C: PaneContent + ?Sized> Default for ContentViewport<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed(Cell<f32>);

    impl PaneContent for Fixed {
        fn natural_height(&self) -> f32 {
            self.0.get()
        }
    }

    fn fixed(height: f32) -> Rc<Fixed> {
        Rc::new(Fixed(Cell::new(height)))
    }

    #[test]
    fn test_empty_viewport() {
        let viewport: ContentViewport<Fixed> = ContentViewport::new();
        assert!(!viewport.has_content());
        assert_eq!(viewport.natural_height(), 0.0);
        assert_eq!(viewport.visible_height(), 0.0);
    }

    #[test]
    fn test_set_same_content_is_noop() {
        let mut viewport = ContentViewport::new();
        let content = fixed(50.0);
        assert_eq!(viewport.set_content(content.clone()), ContentChange::Attached);
        assert_eq!(viewport.set_content(content.clone()), ContentChange::Unchanged);
        assert_eq!(Rc::strong_count(&content), 2);
    }

    #[test]
    fn test_replace_releases_previous() {
        let mut viewport = ContentViewport::new();
        let first = fixed(50.0);
        viewport.set_content(first.clone());
        assert_eq!(viewport.set_content(fixed(80.0)), ContentChange::Replaced);
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(viewport.natural_height(), 80.0);
    }

    #[test]
    fn test_visible_height_clamped() {
        let mut viewport = ContentViewport::new();
        viewport.set_content(fixed(100.0));
        viewport.set_visible_height(250.0);
        assert_eq!(viewport.visible_height(), 100.0);
        viewport.set_visible_height(-3.0);
        assert_eq!(viewport.visible_height(), 0.0);
    }

    #[test]
    fn test_negative_natural_height_reads_zero() {
        let mut viewport = ContentViewport::new();
        viewport.set_content(fixed(-10.0));
        assert_eq!(viewport.natural_height(), 0.0);
    }

    #[test]
    fn test_take_closes_viewport() {
        let mut viewport = ContentViewport::new();
        viewport.set_content(fixed(40.0));
        viewport.set_visible_height(40.0);
        assert!(viewport.take().is_some());
        assert_eq!(viewport.visible_height(), 0.0);
        assert!(viewport.take().is_none());
    }
}
