//! The collapsible pane widget.

use std::rc::Rc;
use std::time::Duration;

use egui::{vec2, Align, Layout, Rect, Response, Sense, Ui, UiBuilder};
use foldpane_core::{
    content_area_style, header_style, BorderStyle, ContentAreaStyle, ContentChange, HeaderStyle,
    Pane, PaneConfig, PaneResult,
};

use crate::content::UiContent;
use crate::header::ToggleHeaderButton;
use crate::style::{paint_content_background, paint_content_border};

/// Response from showing a pane.
pub struct PaneResponse {
    /// The header's response
    pub response: Response,
    /// New expanded flag if the header was toggled this frame
    pub toggled: Option<bool>,
}

/// A collapsible pane: a toggle header stacked above an animated viewport.
///
/// Keep it in your application state and call [`CollapsiblePane::show`]
/// every frame.
///
/// ```rust,ignore
/// let mut pane = CollapsiblePane::new("Filters", 150)?;
/// pane.set_content(UiContent::new(|ui| { ui.label("Only open items"); }).shared());
/// pane.set_header_style("#222831", "#FFD369")?;
///
/// // in the frame callback
/// if let Some(expanded) = pane.show(ui).toggled {
///     log::info!("filters expanded: {expanded}");
/// }
/// ```
pub struct CollapsiblePane {
    pane: Pane<UiContent>,
    header_style: HeaderStyle,
    content_style: ContentAreaStyle,
}

impl CollapsiblePane {
    /// Create a collapsed pane.
    pub fn new(title: impl Into<String>, animation_duration_ms: u64) -> PaneResult<Self> {
        Self::from_config(PaneConfig::new(title, animation_duration_ms))
    }

    /// Create a pane from a configuration.
    pub fn from_config(config: PaneConfig) -> PaneResult<Self> {
        Ok(Self {
            pane: Pane::from_config(config)?,
            header_style: HeaderStyle::default(),
            content_style: ContentAreaStyle::default(),
        })
    }

    /// The underlying state machine.
    pub fn pane(&self) -> &Pane<UiContent> {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut Pane<UiContent> {
        &mut self.pane
    }

    pub fn set_content(&mut self, content: Rc<UiContent>) -> ContentChange {
        self.pane.set_content(content)
    }

    pub fn content(&self) -> Option<&Rc<UiContent>> {
        self.pane.content()
    }

    pub fn clear_content(&mut self) -> bool {
        self.pane.clear_content()
    }

    pub fn is_expanded(&self) -> bool {
        self.pane.is_expanded()
    }

    /// Flip the fold state as a header click would.
    pub fn toggle(&mut self) -> bool {
        self.pane.toggle()
    }

    /// Register a listener for expand/collapse notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.pane.subscribe(listener);
    }

    /// Replace the header style with one built from hex colors.
    pub fn set_header_style(&mut self, background: &str, foreground: &str) -> PaneResult<()> {
        self.header_style = header_style(background, foreground)?;
        Ok(())
    }

    /// Replace the content area style with one built from hex colors and
    /// border parameters.
    pub fn set_content_area_style(
        &mut self,
        background: &str,
        border_color: &str,
        border_width: f32,
        border_style: BorderStyle,
    ) -> PaneResult<()> {
        self.content_style =
            content_area_style(background, border_color, border_width, border_style)?;
        Ok(())
    }

    pub fn header_style(&self) -> &HeaderStyle {
        &self.header_style
    }

    pub fn header_style_mut(&mut self) -> &mut HeaderStyle {
        &mut self.header_style
    }

    pub fn content_area_style(&self) -> &ContentAreaStyle {
        &self.content_style
    }

    pub fn content_area_style_mut(&mut self) -> &mut ContentAreaStyle {
        &mut self.content_style
    }

    /// Show the pane and return the header response.
    pub fn show(&mut self, ui: &mut Ui) -> PaneResponse {
        ui.scope(|ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            self.show_inner(ui)
        })
        .inner
    }

    fn show_inner(&mut self, ui: &mut Ui) -> PaneResponse {
        let header = ToggleHeaderButton::new(
            self.pane.title(),
            self.pane.indicator(),
            &self.header_style,
        );
        let header_height = header.height();
        let (header_rect, response) = header.allocate(ui);
        self.pane.set_header_height(header_height);

        // Toggle before painting so the arrow drawn this frame is the new one.
        let toggled = response.clicked().then(|| self.pane.toggle());
        ToggleHeaderButton::new(
            self.pane.title(),
            self.pane.indicator(),
            &self.header_style,
        )
        .paint(ui, header_rect, &response);

        if self.pane.is_animating() {
            let dt = ui.input(|i| i.stable_dt);
            if dt.is_finite() && dt > 0.0 {
                self.pane.advance(Duration::from_secs_f32(dt));
            }
            if self.pane.is_animating() {
                ui.ctx().request_repaint();
            }
        }

        self.show_viewport(ui);

        PaneResponse { response, toggled }
    }

    fn show_viewport(&mut self, ui: &mut Ui) {
        let Some(content) = self.pane.content().cloned() else {
            return;
        };

        let inset = self.content_style.effective_border_width();
        let width = ui.available_width();
        let top_left = ui.cursor().min;
        let viewport_rect =
            Rect::from_min_size(top_left, vec2(width, self.pane.heights().viewport));

        paint_content_background(ui.painter(), viewport_rect, &self.content_style);

        // Content lays out at its natural height and is clipped to the viewport.
        let max_rect = Rect::from_min_size(
            top_left + vec2(inset, inset),
            vec2((width - inset * 2.0).max(0.0), f32::INFINITY),
        );
        let mut child = ui.new_child(
            UiBuilder::new()
                .id_salt(self.pane.id().as_uuid())
                .max_rect(max_rect)
                .layout(Layout::top_down(Align::Min)),
        );
        child.set_clip_rect(viewport_rect.shrink(inset).intersect(ui.clip_rect()));
        content.show(&mut child);
        content.set_measured(child.min_rect().height() + inset * 2.0);

        paint_content_border(ui.painter(), viewport_rect, &self.content_style);
        ui.allocate_rect(viewport_rect, Sense::hover());

        if self.pane.refresh_content_height() {
            ui.ctx().request_repaint();
        }
    }
}
