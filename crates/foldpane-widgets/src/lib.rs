//! egui widgets for the animated collapsible pane.
//!
//! - **Pane**: the retained [`CollapsiblePane`] a host keeps in its state and
//!   shows every frame
//! - **Header**: the painted, checkable title bar with its arrow indicator
//! - **Content**: closure-backed content units with measured height
//! - **Style**: mapping of core style records onto egui colors and strokes

pub mod content;
pub mod header;
pub mod pane;
pub mod style;

pub use content::UiContent;
pub use header::ToggleHeaderButton;
pub use pane::{CollapsiblePane, PaneResponse};
pub use style::{paint_content_background, paint_content_border, to_color32};

pub use foldpane_core::{
    BorderStyle, ContentAreaStyle, Easing, HeaderStyle, PaneConfig, PaneError, PaneResult,
};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Header title font size
    pub const HEADER_FONT_SIZE: f32 = 13.0;
    /// Side length of the arrow indicator
    pub const ARROW_SIZE: f32 = 8.0;
    /// Gap between arrow and title
    pub const ARROW_GAP: f32 = 6.0;
    /// Header corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Dash length for dashed borders
    pub const DASH_LENGTH: f32 = 6.0;
    /// Gap length for dashed borders
    pub const DASH_GAP: f32 = 4.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Overlay painted on the header while hovered
    pub const HOVER_OVERLAY: Color32 = Color32::from_rgba_premultiplied(20, 20, 20, 20);
    /// Overlay painted on the header while pressed
    pub const ACTIVE_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 30);
}
