//! FoldPane Core Library
//!
//! Toolkit-independent model of a collapsible pane: the expand/collapse
//! state machine, the synchronized height animation and the style records
//! a renderer applies to the header and content area.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod header;
pub mod pane;
pub mod style;
pub mod viewport;

pub use animation::{Direction, Easing, HeightAnimation, HeightBounds, Track};
pub use color::StyleColor;
pub use config::{PaneConfig, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_HEADER_HEIGHT};
pub use error::{PaneError, PaneResult};
pub use header::{FoldState, Indicator, ToggleHeader};
pub use pane::{Pane, PaneHeights, PaneId};
pub use style::{BorderStyle, ContentAreaStyle, HeaderStyle, content_area_style, header_style};
pub use viewport::{ContentChange, ContentViewport, PaneContent};
