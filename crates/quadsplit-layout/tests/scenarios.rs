//! End-to-end layout and drag scenarios.

use quadsplit_common::{LayoutError, Point, Rect, SplitAxis};
use quadsplit_config::LayoutConfig;
use quadsplit_layout::clamp::clamp_ratio;
use quadsplit_layout::geometry::{pointer_to_ratio, quantize};
use quadsplit_layout::{DragPhase, LayoutEngine, PointerEvent, SplitState, SplitView};

const EPS: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("quadsplit_layout=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn scenario_a_two_panes_with_padding() {
    let config = LayoutConfig::default().with_padding(10.0);
    let layout = LayoutEngine::new(config)
        .compute(2, &SplitState::new(0.5, 0.5), Rect::new(0.0, 0.0, 300.0, 200.0))
        .unwrap();
    assert_eq!(layout.regions[0], (0, Rect::new(0.0, 0.0, 145.0, 200.0)));
    assert_eq!(layout.regions[1], (1, Rect::new(155.0, 0.0, 145.0, 200.0)));
}

#[test]
fn scenario_b_clamp_to_max_ratio() {
    assert!((clamp_ratio(0.9, 100.0, 40.0) - 0.6).abs() < EPS);
}

#[test]
fn scenario_c_snap_before_division() {
    assert_eq!(quantize(187.0, 20.0), 180.0);
    assert!((pointer_to_ratio(187.0, 300.0, 20.0) - 0.6).abs() < EPS);
}

#[test]
fn scenario_d_five_slots_yield_diagnostic() {
    init_tracing();
    let result = LayoutEngine::new(LayoutConfig::default()).compute(
        5,
        &SplitState::default(),
        Rect::new(0.0, 0.0, 300.0, 200.0),
    );
    assert_eq!(result, Err(LayoutError::UnsupportedSlotCount { count: 5 }));
}

#[test]
fn slot_count_checked_before_container_size() {
    let result = LayoutEngine::new(LayoutConfig::default()).compute(
        5,
        &SplitState::default(),
        Rect::new(0.0, 0.0, 0.0, 0.0),
    );
    assert_eq!(result, Err(LayoutError::UnsupportedSlotCount { count: 5 }));
}

#[test]
fn narrow_container_pins_both_regions_to_half() {
    init_tracing();
    // 60 < 2 * 40: the ratio range collapses to 0.5
    let container = Rect::new(0.0, 0.0, 60.0, 200.0);
    for ratio in [0.0, 0.2, 0.9] {
        let layout = LayoutEngine::new(LayoutConfig::default())
            .compute(2, &SplitState::new(ratio, 0.5), container)
            .unwrap();
        assert_eq!(layout.regions[0], (0, Rect::new(0.0, 0.0, 30.0, 200.0)));
        assert_eq!(layout.regions[1], (1, Rect::new(30.0, 0.0, 30.0, 200.0)));
        assert_eq!(layout.handle.unwrap().center, Point::new(30.0, 100.0));
    }
}

#[test]
fn scenario_e_drag_cycle_on_two_panes() {
    init_tracing();
    let slots = ["left", "right"];
    let view = SplitView::new(&slots, LayoutConfig::default());
    let container = Rect::new(0.0, 0.0, 300.0, 200.0);
    let mut state = SplitState::default();
    let mut ctl = view.controller();

    assert_eq!(ctl.phase(), DragPhase::Idle);
    assert!(ctl.handle_event(PointerEvent::Down(Point::new(150.0, 100.0)), container, &mut state));
    assert!(!state.is_dragging);

    assert!(ctl.handle_event(PointerEvent::Move(Point::new(187.0, 100.0)), container, &mut state));
    assert_eq!(ctl.phase(), DragPhase::Dragging);
    assert!(state.is_dragging);
    assert!((state.primary_ratio - 0.6).abs() < EPS);

    assert!(ctl.handle_event(PointerEvent::Move(Point::new(290.0, 100.0)), container, &mut state));
    assert!(ctl.handle_event(PointerEvent::Up(Point::new(290.0, 100.0)), container, &mut state));
    assert_eq!(ctl.phase(), DragPhase::Idle);
    assert!(!state.is_dragging);
    // 290 snaps to 280, 280 / 300 exceeds 1 - 40 / 300
    assert!((state.primary_ratio - (1.0 - 40.0 / 300.0)).abs() < EPS);
}

#[test]
fn two_pane_widths_plus_padding_fill_container() {
    for axis in [SplitAxis::Horizontal, SplitAxis::Vertical] {
        for padding in [0.0, 4.0, 10.0, 17.5, 100.0, 150.0] {
            for ratio in [-1.0, 0.0, 0.2, 0.5, 0.77, 1.0, 3.0] {
                let config = LayoutConfig::default().with_axis(axis).with_padding(padding);
                let container = Rect::new(5.0, 7.0, 640.0, 480.0);
                let layout = LayoutEngine::new(config)
                    .compute(2, &SplitState::new(ratio, 0.5), container)
                    .unwrap();
                let (a, b) = (layout.regions[0].1, layout.regions[1].1);
                let (total, extent) = match axis {
                    SplitAxis::Horizontal => (a.width + b.width, container.width),
                    SplitAxis::Vertical => (a.height + b.height, container.height),
                };
                assert!((total + padding - extent).abs() < EPS, "axis={axis:?} ratio={ratio}");
                assert!(!a.overlaps(&b));
                assert!(a.width >= 0.0 && a.height >= 0.0);
                assert!(b.width >= 0.0 && b.height >= 0.0);
            }
        }
    }
}

#[test]
fn regions_never_overlap_for_any_count() {
    for count in 1..=4 {
        for placement in [false, true] {
            let config = LayoutConfig {
                inner_padding: 6.0,
                secondary_placement: placement,
                ..LayoutConfig::default()
            };
            let layout = LayoutEngine::new(config)
                .compute(count, &SplitState::new(0.3, 0.65), Rect::new(0.0, 0.0, 500.0, 400.0))
                .unwrap();
            assert_eq!(layout.regions.len(), count);
            for (i, (_, a)) in layout.regions.iter().enumerate() {
                for (_, b) in layout.regions.iter().skip(i + 1) {
                    assert!(!a.overlaps(b), "count={count} {a:?} {b:?}");
                }
            }
        }
    }
}

#[test]
fn nested_splits_use_complementary_axis() {
    for axis in [SplitAxis::Horizontal, SplitAxis::Vertical] {
        for count in 3..=4 {
            let config = LayoutConfig::default().with_axis(axis);
            let layout = LayoutEngine::new(config)
                .compute(count, &SplitState::default(), Rect::new(0.0, 0.0, 500.0, 400.0))
                .unwrap();
            for border in &layout.borders {
                let expected = if border.level == 0 { axis } else { axis.complement() };
                assert_eq!(border.axis, expected);
            }
        }
    }
}

#[test]
fn layout_is_idempotent() {
    let engine = LayoutEngine::new(LayoutConfig::default().with_padding(3.0));
    let state = SplitState::new(0.37, 0.81);
    let container = Rect::new(0.0, 0.0, 1024.0, 768.0);
    for count in 0..=4 {
        let first = engine.compute(count, &state, container).unwrap();
        let second = engine.compute(count, &state, container).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn handle_sits_on_the_visible_boundary() {
    for placement in [false, true] {
        for count in 2..=4 {
            let config = LayoutConfig {
                secondary_placement: placement,
                snap_quantum: 0.0,
                ..LayoutConfig::default()
            };
            let layout = LayoutEngine::new(config)
                .compute(count, &SplitState::new(0.3, 0.6), Rect::new(0.0, 0.0, 500.0, 400.0))
                .unwrap();
            let handle = layout.handle.unwrap();
            assert!((handle.center.x - layout.borders[0].position).abs() < EPS);
            if count > 2 {
                assert!((handle.center.y - layout.borders[1].position).abs() < EPS);
            }
        }
    }
}
