//! Height interpolation for the expand/collapse transition.
//!
//! A single progress value drives every animated height. The pane's minimum
//! and maximum heights and the viewport's maximum height are each a linear
//! function of the eased progress over [`HeightBounds`], so they can never
//! drift apart: they share duration, direction and easing by construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PaneError, PaneResult};

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    InCubic,
    /// Fast start, gentle landing.
    #[default]
    OutCubic,
    InOutCubic,
}

impl Easing {
    /// Map linear progress in [0, 1] onto the curve. Endpoints are fixed.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Play direction. Forward expands, backward collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    #[default]
    Backward,
}

impl Direction {
    /// Direction that ends in the expanded (`true`) or collapsed state.
    pub fn towards(expanded: bool) -> Self {
        if expanded {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Progress value at which playback in this direction stops.
    pub fn end_progress(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => 0.0,
        }
    }
}

/// One of the heights driven by the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    PaneMinimum,
    PaneMaximum,
    Viewport,
}

/// Start/end heights shared by the tracks.
///
/// Pane tracks run from `collapsed` to `collapsed + content`; the viewport
/// track runs from 0 to `content`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeightBounds {
    /// Height of the pane with the viewport fully closed (the header).
    pub collapsed: f32,
    /// Natural height of the content.
    pub content: f32,
}

impl HeightBounds {
    /// Bounds with negative or non-finite inputs clamped to zero.
    pub fn new(collapsed: f32, content: f32) -> Self {
        Self {
            collapsed: sanitize(collapsed),
            content: sanitize(content),
        }
    }

    /// Bounds that leave the viewport closed at either end.
    pub fn empty(collapsed: f32) -> Self {
        Self::new(collapsed, 0.0)
    }

    pub fn start(&self, track: Track) -> f32 {
        match track {
            Track::PaneMinimum | Track::PaneMaximum => self.collapsed,
            Track::Viewport => 0.0,
        }
    }

    pub fn end(&self, track: Track) -> f32 {
        self.start(track) + self.content
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// The shared height interpolation.
#[derive(Debug, Clone)]
pub struct HeightAnimation {
    duration: Duration,
    easing: Easing,
    direction: Direction,
    /// Linear progress in [0, 1]; 0 is collapsed, 1 is expanded.
    progress: f32,
    running: bool,
    bounds: HeightBounds,
}

impl HeightAnimation {
    /// Create a stopped, collapsed animation.
    pub fn new(duration: Duration, easing: Easing) -> PaneResult<Self> {
        if duration.is_zero() {
            return Err(PaneError::ZeroDuration);
        }
        Ok(Self {
            duration,
            easing,
            direction: Direction::Backward,
            progress: 0.0,
            running: false,
            bounds: HeightBounds::default(),
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn bounds(&self) -> HeightBounds {
        self.bounds
    }

    /// Replace the bounds. Progress is kept, so a running animation carries
    /// on toward its target with the new heights.
    pub fn set_bounds(&mut self, bounds: HeightBounds) {
        self.bounds = bounds;
    }

    /// Play toward the end of `direction`.
    ///
    /// A running animation heading the other way is redirected from its
    /// current progress rather than restarted.
    pub fn play(&mut self, direction: Direction) {
        if self.running && self.direction != direction {
            log::trace!(
                "Reversing height animation at progress {:.3} toward {:?}",
                self.progress,
                direction
            );
        }
        self.direction = direction;
        self.running = self.progress != direction.end_progress();
    }

    /// Step the animation by `dt`. Returns whether it is still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        let step = dt.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = match self.direction {
            Direction::Forward => (self.progress + step).min(1.0),
            Direction::Backward => (self.progress - step).max(0.0),
        };

        if self.progress == self.direction.end_progress() {
            self.running = false;
            log::debug!("Height animation finished {:?}", self.direction);
        }
        self.running
    }

    /// Jump to the end of the current direction and stop.
    pub fn finish(&mut self) {
        self.progress = self.direction.end_progress();
        self.running = false;
    }

    /// Stop at the end of `direction` without playing.
    pub fn jump_to(&mut self, direction: Direction) {
        self.direction = direction;
        self.finish();
    }

    /// Eased progress in [0, 1].
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress)
    }

    /// Current height of a track.
    pub fn value(&self, track: Track) -> f32 {
        let eased = self.eased();
        let (start, end) = (self.bounds.start(track), self.bounds.end(track));
        if eased <= 0.0 {
            start
        } else if eased >= 1.0 {
            end
        } else {
            start + (end - start) * eased
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation(ms: u64) -> HeightAnimation {
        let mut anim = HeightAnimation::new(Duration::from_millis(ms), Easing::Linear).unwrap();
        anim.set_bounds(HeightBounds::new(30.0, 120.0));
        anim
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = HeightAnimation::new(Duration::ZERO, Easing::OutCubic);
        assert!(matches!(result, Err(PaneError::ZeroDuration)));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::InCubic, Easing::OutCubic, Easing::InOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-1.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(2.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_out_cubic_leads_linear() {
        assert!(Easing::OutCubic.apply(0.25) > 0.25);
        assert!(Easing::InCubic.apply(0.25) < 0.25);
    }

    #[test]
    fn test_bounds_sanitized() {
        let bounds = HeightBounds::new(-5.0, f32::NAN);
        assert_eq!(bounds.collapsed, 0.0);
        assert_eq!(bounds.content, 0.0);
    }

    #[test]
    fn test_forward_reaches_bounds_together() {
        let mut anim = animation(150);
        anim.play(Direction::Forward);
        assert!(anim.is_running());

        while anim.advance(Duration::from_millis(16)) {}

        assert_eq!(anim.value(Track::PaneMinimum), 150.0);
        assert_eq!(anim.value(Track::PaneMaximum), 150.0);
        assert_eq!(anim.value(Track::Viewport), 120.0);
    }

    #[test]
    fn test_tracks_move_in_lockstep() {
        let mut anim = animation(100);
        anim.play(Direction::Forward);
        anim.advance(Duration::from_millis(50));

        let viewport = anim.value(Track::Viewport);
        assert!((viewport - 60.0).abs() < 1e-3);
        assert!((anim.value(Track::PaneMinimum) - (30.0 + viewport)).abs() < 1e-3);
        assert_eq!(anim.value(Track::PaneMinimum), anim.value(Track::PaneMaximum));
    }

    #[test]
    fn test_reverse_mid_flight_keeps_progress() {
        let mut anim = animation(100);
        anim.play(Direction::Forward);
        anim.advance(Duration::from_millis(40));
        let before = anim.progress();

        anim.play(Direction::Backward);
        assert!(anim.is_running());
        assert_eq!(anim.progress(), before);

        anim.advance(Duration::from_millis(10));
        assert!(anim.progress() < before);

        while anim.advance(Duration::from_millis(10)) {}
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.value(Track::Viewport), 0.0);
    }

    #[test]
    fn test_play_at_end_does_not_run() {
        let mut anim = animation(100);
        anim.play(Direction::Backward);
        assert!(!anim.is_running());
        assert!(!anim.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_jump_to() {
        let mut anim = animation(100);
        anim.jump_to(Direction::Forward);
        assert!(!anim.is_running());
        assert_eq!(anim.value(Track::Viewport), 120.0);
    }

    #[test]
    fn test_set_bounds_while_running() {
        let mut anim = animation(100);
        anim.play(Direction::Forward);
        anim.advance(Duration::from_millis(50));
        anim.set_bounds(HeightBounds::new(30.0, 40.0));
        assert!((anim.value(Track::Viewport) - 20.0).abs() < 1e-3);

        while anim.advance(Duration::from_millis(16)) {}
        assert_eq!(anim.value(Track::Viewport), 40.0);
    }
}
