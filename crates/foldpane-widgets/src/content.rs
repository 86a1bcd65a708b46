//! Content units rendered inside a pane.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use egui::Ui;
use foldpane_core::PaneContent;

type AddContents = Box<dyn FnMut(&mut Ui)>;

/// Content built by a closure, with its natural height measured on render.
///
/// The pane renders the closure every frame, collapsed or not, so the
/// measured height is current when the user toggles.
pub struct UiContent {
    add_contents: RefCell<AddContents>,
    measured: Cell<f32>,
}

impl UiContent {
    /// Create content from a closure.
    pub fn new(add_contents: impl FnMut(&mut Ui) + 'static) -> Self {
        Self {
            add_contents: RefCell::new(Box::new(add_contents)),
            measured: Cell::new(0.0),
        }
    }

    /// Seed the natural height before the first render.
    pub fn with_height_hint(self, height: f32) -> Self {
        self.set_measured(height);
        self
    }

    /// Wrap for handing to a pane.
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub(crate) fn show(&self, ui: &mut Ui) {
        match self.add_contents.try_borrow_mut() {
            Ok(mut add_contents) => (&mut **add_contents)(ui),
            Err(_) => log::warn!("Pane content rendered re-entrantly, skipping"),
        }
    }

    pub(crate) fn set_measured(&self, height: f32) {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.measured.set(height);
    }
}

impl PaneContent for UiContent {
    fn natural_height(&self) -> f32 {
        self.measured.get()
    }
}

impl fmt::Debug for UiContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContent")
            .field("measured", &self.measured.get())
            .finish_non_exhaustive()
    }
}
