//! Mapping of core style records onto egui painting.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Shape, Stroke, StrokeKind};
use foldpane_core::{BorderStyle, ContentAreaStyle, StyleColor};

use crate::sizing;

/// Convert a style color to an egui color.
pub fn to_color32(color: StyleColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Paint the content area background. Call before painting content.
pub fn paint_content_background(painter: &Painter, rect: Rect, style: &ContentAreaStyle) {
    if style.background.is_transparent() || rect.height() <= 0.0 {
        return;
    }
    painter.rect_filled(
        rect,
        CornerRadius::same(style.corner_radius),
        to_color32(style.background),
    );
}

/// Paint the content area border. Call after painting content.
pub fn paint_content_border(painter: &Painter, rect: Rect, style: &ContentAreaStyle) {
    let width = style.effective_border_width();
    if width <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let color = to_color32(style.border_color);

    match style.border_style {
        BorderStyle::None => {}
        BorderStyle::Solid => {
            painter.rect_stroke(
                rect,
                CornerRadius::same(style.corner_radius),
                Stroke::new(width, color),
                StrokeKind::Inside,
            );
        }
        BorderStyle::Dashed => {
            let outline = outline(rect.shrink(width / 2.0));
            painter.extend(Shape::dashed_line(
                &outline,
                Stroke::new(width, color),
                sizing::DASH_LENGTH,
                sizing::DASH_GAP,
            ));
        }
        BorderStyle::Dotted => {
            let radius = width / 2.0;
            let outline = outline(rect.shrink(radius));
            painter.extend(Shape::dotted_line(&outline, color, width * 2.0, radius));
        }
    }
}

/// Closed outline of a rect, clockwise from the top-left corner.
fn outline(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ]
}
