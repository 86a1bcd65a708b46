//! End-to-end pane scenarios driven the way a host event loop drives them.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use foldpane_core::{Indicator, Pane, PaneConfig, PaneContent, PaneError, header_style};

const FRAME: Duration = Duration::from_millis(16);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Content with a fixed height that counts how often it was dropped.
struct Tracked {
    height: f32,
    drops: Rc<Cell<u32>>,
}

impl PaneContent for Tracked {
    fn natural_height(&self) -> f32 {
        self.height
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn tracked(height: f32, drops: &Rc<Cell<u32>>) -> Rc<Tracked> {
    Rc::new(Tracked {
        height,
        drops: drops.clone(),
    })
}

fn pane(duration_ms: u64) -> Pane<Tracked> {
    let mut config = PaneConfig::new("Section", duration_ms);
    config.header_height = 30.0;
    Pane::from_config(config).unwrap()
}

fn run_frames(pane: &mut Pane<Tracked>, frames: usize) {
    for _ in 0..frames {
        pane.advance(FRAME);
    }
}

fn settle(pane: &mut Pane<Tracked>) {
    while pane.advance(FRAME) {}
}

#[test]
fn test_expand_collapse_scenario() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    pane.set_content(tracked(120.0, &drops));

    pane.toggle();
    settle(&mut pane);
    let heights = pane.heights();
    assert_eq!(heights.maximum, 150.0);
    assert_eq!(heights.viewport, 120.0);

    pane.toggle();
    settle(&mut pane);
    let heights = pane.heights();
    assert_eq!(heights.maximum, 30.0);
    assert_eq!(heights.viewport, 0.0);
}

#[test]
fn test_completed_animation_matches_bounds_for_many_sizes() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    for duration_ms in [1, 16, 100, 333] {
        for height in [0.0, 1.0, 47.5, 480.0] {
            let mut pane = pane(duration_ms);
            pane.set_content(tracked(height, &drops));

            pane.toggle();
            settle(&mut pane);
            assert_eq!(pane.heights().viewport, height);
            assert_eq!(pane.heights().minimum, 30.0 + height);

            pane.toggle();
            settle(&mut pane);
            assert_eq!(pane.heights().viewport, 0.0);
            assert_eq!(pane.heights().minimum, 30.0);
        }
    }
}

#[test]
fn test_rapid_toggle_ends_collapsed() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    pane.set_content(tracked(120.0, &drops));

    pane.toggle();
    run_frames(&mut pane, 3);
    let midway = pane.heights().viewport;
    assert!(midway > 0.0 && midway < 120.0);

    pane.toggle();
    assert!(pane.is_animating());
    assert_eq!(pane.indicator(), Indicator::Closed);
    // Redirected, not restarted: the first reverse frame moves down from midway.
    pane.advance(FRAME);
    assert!(pane.heights().viewport < midway);

    settle(&mut pane);
    assert!(!pane.is_expanded());
    assert_eq!(pane.heights().viewport, 0.0);
}

#[test]
fn test_no_content_toggle_keeps_viewport_closed() {
    init_logging();
    let mut pane = pane(150);

    pane.toggle();
    assert!(!pane.is_animating());
    assert_eq!(pane.heights().viewport, 0.0);
    assert_eq!(pane.heights().maximum, 30.0);
}

#[test]
fn test_clear_while_expanded() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(100);
    pane.set_content(tracked(120.0, &drops));
    pane.toggle();
    settle(&mut pane);

    assert!(pane.clear_content());
    assert_eq!(drops.get(), 1);
    assert_eq!(pane.heights().viewport, 0.0);

    let before = pane.heights();
    pane.toggle();
    pane.toggle();
    assert!(pane.is_expanded());
    assert!(!pane.is_animating());
    assert_eq!(pane.heights(), before);
}

#[test]
fn test_clear_during_animation_pins_viewport() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    pane.set_content(tracked(120.0, &drops));
    pane.toggle();
    run_frames(&mut pane, 2);

    pane.clear_content();
    assert!(!pane.is_animating());
    assert_eq!(pane.heights().viewport, 0.0);
    run_frames(&mut pane, 10);
    assert_eq!(pane.heights().viewport, 0.0);
}

#[test]
fn test_set_same_content_is_idempotent() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    let content = tracked(120.0, &drops);
    pane.set_content(content.clone());
    pane.toggle();
    run_frames(&mut pane, 2);
    let progress = pane.animation().progress();

    pane.set_content(content.clone());
    assert_eq!(pane.animation().progress(), progress);
    assert!(pane.is_animating());
    drop(content);
    assert_eq!(drops.get(), 0);
}

#[test]
fn test_replacing_content_disposes_previous() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    pane.set_content(tracked(120.0, &drops));
    pane.set_content(tracked(60.0, &drops));
    assert_eq!(drops.get(), 1);

    pane.toggle();
    settle(&mut pane);
    assert_eq!(pane.heights().viewport, 60.0);

    drop(pane);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_replace_mid_animation_retargets() {
    init_logging();
    let drops = Rc::new(Cell::new(0));
    let mut pane = pane(150);
    pane.set_content(tracked(120.0, &drops));
    pane.toggle();
    run_frames(&mut pane, 3);

    pane.set_content(tracked(300.0, &drops));
    assert!(pane.is_animating());
    settle(&mut pane);
    assert_eq!(pane.heights().viewport, 300.0);
    assert_eq!(pane.heights().maximum, 330.0);
}

#[test]
fn test_dyn_content() {
    init_logging();
    struct Label;
    impl PaneContent for Label {
        fn natural_height(&self) -> f32 {
            18.0
        }
    }

    let mut pane: Pane = Pane::new("Dyn", 50).unwrap();
    pane.set_content(Rc::new(Label));
    pane.set_expanded(true);
    while pane.advance(FRAME) {}
    assert_eq!(pane.heights().viewport, 18.0);
}

#[test]
fn test_invalid_configuration() {
    init_logging();
    assert!(matches!(
        Pane::<Tracked>::new("Section", 0),
        Err(PaneError::ZeroDuration)
    ));
    assert!(matches!(
        PaneConfig::from_json(r#"{"title": 5}"#),
        Err(PaneError::Config(_))
    ));
}

#[test]
fn test_header_style_replaces_previous() {
    let first = header_style("#222831", "#FFD369").unwrap();
    assert_eq!(first.background.to_hex(), "#222831");
    assert_eq!(first.foreground.to_hex(), "#FFD369");

    let second = header_style("#0066FF", "#FFFFFF").unwrap();
    assert_ne!(first, second);
    assert_eq!(second.background.to_hex(), "#0066FF");
}
