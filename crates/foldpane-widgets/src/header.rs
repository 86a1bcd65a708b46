//! Toggle header: the clickable title bar of a pane.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Response, Sense, Shape,
    Stroke, Ui,
};
use foldpane_core::{HeaderStyle, Indicator};

use crate::style::to_color32;
use crate::{sizing, theme};

/// A full-width checkable title bar with an arrow indicator.
pub struct ToggleHeaderButton<'a> {
    title: &'a str,
    indicator: Indicator,
    style: &'a HeaderStyle,
    font_size: f32,
}

impl<'a> ToggleHeaderButton<'a> {
    /// Create a new header button.
    pub fn new(title: &'a str, indicator: Indicator, style: &'a HeaderStyle) -> Self {
        Self {
            title,
            indicator,
            style,
            font_size: sizing::HEADER_FONT_SIZE,
        }
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Natural height of the header for the current style.
    pub fn height(&self) -> f32 {
        self.font_size.max(sizing::ARROW_SIZE) + self.style.padding.max(0.0) * 2.0
    }

    /// Show the header. The caller toggles on `clicked()`.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = self.allocate(ui);
        self.paint(ui, rect, &response);
        response
    }

    /// Reserve the header's space and sense clicks without painting.
    ///
    /// Pair with [`ToggleHeaderButton::paint`] when a click has to change
    /// the indicator before it is drawn.
    pub fn allocate(&self, ui: &mut Ui) -> (Rect, Response) {
        let size = vec2(ui.available_width(), self.height());
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        (rect, response.on_hover_cursor(CursorIcon::PointingHand))
    }

    /// Paint the header into a rect from [`ToggleHeaderButton::allocate`].
    pub fn paint(&self, ui: &Ui, rect: Rect, response: &Response) {
        if !ui.is_rect_visible(rect) {
            return;
        }

        let radius = CornerRadius::same(sizing::CORNER_RADIUS);
        let painter = ui.painter();
        painter.rect_filled(rect, radius, to_color32(self.style.background));

        if response.is_pointer_button_down_on() {
            painter.rect_filled(rect, radius, theme::ACTIVE_OVERLAY);
        } else if response.hovered() {
            painter.rect_filled(rect, radius, theme::HOVER_OVERLAY);
        }

        let fg = to_color32(self.style.foreground);
        let arrow_center = Pos2::new(
            rect.left() + self.style.padding + sizing::ARROW_SIZE / 2.0,
            rect.center().y,
        );
        painter.add(arrow_shape(arrow_center, sizing::ARROW_SIZE, self.indicator, fg));

        let text_pos = Pos2::new(
            arrow_center.x + sizing::ARROW_SIZE / 2.0 + sizing::ARROW_GAP,
            rect.center().y,
        );
        let font_id = FontId::proportional(self.font_size);
        painter.text(text_pos, Align2::LEFT_CENTER, self.title, font_id.clone(), fg);
        if self.style.bold {
            // No bold face in the default fonts; overdraw shifted by half a point.
            painter.text(
                text_pos + vec2(0.5, 0.0),
                Align2::LEFT_CENTER,
                self.title,
                font_id,
                fg,
            );
        }
    }
}

/// Filled triangle pointing right (closed) or down (open).
fn arrow_shape(center: Pos2, size: f32, indicator: Indicator, color: Color32) -> Shape {
    let rect = Rect::from_center_size(center, vec2(size, size));
    let points = match indicator {
        Indicator::Closed => vec![
            rect.left_top(),
            Pos2::new(rect.right(), center.y),
            rect.left_bottom(),
        ],
        Indicator::Open => vec![
            rect.left_top(),
            rect.right_top(),
            Pos2::new(center.x, rect.bottom()),
        ],
    };
    Shape::convex_polygon(points, color, Stroke::NONE)
}
