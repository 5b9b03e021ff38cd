//! Tests for outline layout, indicator placement and drag handling.

use super::*;
use chrono::{TimeZone, Utc};

// ===== Helpers =====

fn id(raw: &str) -> NodeId {
    NodeId::new(raw).unwrap()
}

fn node(raw: &str, height: f64) -> ContentNode {
    ContentNode::new(id(raw), height)
}

/// Four nodes totalling 4000px: 400, 1200, 2000, 400.
fn article() -> Vec<ContentNode> {
    vec![
        node("intro", 400.0),
        node("methods", 1200.0),
        node("results", 2000.0),
        node("refs", 400.0),
    ]
}

fn article_state() -> SharedState {
    let mut state = SharedState::new();
    state.colors.insert(id("intro"), Color::new("#687E00").unwrap());
    state.colors.insert(id("methods"), Color::new("#687E00").unwrap());
    state.colors.insert(id("results"), Color::new("#135574").unwrap());
    state.add_bookmark(
        id("results"),
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    );
    state
}

/// Rendered outline at scale 4 (4000px content in a 1000px viewport).
fn rendered(scroll_top: f64) -> Outline {
    let mut outline = Outline::default();
    outline
        .render(
            &article(),
            &article_state(),
            Measurements::new(scroll_top, 1000.0, 4000.0),
        )
        .expect("render should succeed");
    outline
}

fn dump(outline: &Outline) -> String {
    let mut lines: Vec<String> = outline
        .nodes()
        .iter()
        .map(|n| {
            format!(
                "{:<8} top={:.1} height={:.1} color={} highlighted={}",
                n.id.as_str(),
                n.top,
                n.height,
                n.color.as_ref().map(|c| c.as_str()).unwrap_or("-"),
                n.highlighted
            )
        })
        .collect();
    if let Some(area) = outline.visible_area() {
        lines.push(format!("indicator top={:.1} height={:.1}", area.top, area.height));
    }
    lines.join("\n")
}

// ===== Render =====

mod render {
    use super::*;

    #[test]
    fn lays_out_nodes_proportionally() {
        let outline = rendered(800.0);

        insta::assert_snapshot!(dump(&outline), @r"
        intro    top=0.0 height=99.0 color=#687E00 highlighted=false
        methods  top=100.0 height=299.0 color=#687E00 highlighted=false
        results  top=400.0 height=499.0 color=#135574 highlighted=true
        refs     top=900.0 height=99.0 color=- highlighted=false
        indicator top=200.0 height=250.0
        ");
    }

    #[test]
    fn scale_factor_is_content_over_viewport() {
        let outline = rendered(0.0);
        assert_eq!(outline.scale_factor().map(|s| s.get()), Some(4.0));
    }

    #[test]
    fn four_hundred_pixel_node_at_scale_four_is_ninety_nine_high() {
        let outline = rendered(0.0);
        assert_eq!(outline.nodes()[0].height, 99.0);
    }

    #[test]
    fn gap_shrinks_box_but_not_step() {
        let outline = rendered(0.0);
        let nodes = outline.nodes();

        for pair in nodes.windows(2) {
            let step = pair[1].top - pair[0].top;
            assert_eq!(pair[0].height, step - 1.0);
        }
    }

    #[test]
    fn total_height_is_sum_of_steps() {
        let outline = rendered(0.0);
        assert_eq!(outline.total_height(), 1000.0);
    }

    #[test]
    fn content_fitting_viewport_renders_nothing() {
        let mut outline = Outline::default();
        outline
            .render(&article(), &article_state(), Measurements::new(0.0, 4000.0, 4000.0))
            .unwrap();

        assert!(outline.is_empty());
        assert!(outline.nodes().is_empty());
        assert_eq!(outline.visible_area(), None);
        assert_eq!(outline.total_height(), 0.0);
    }

    #[test]
    fn content_fitting_clears_previous_layout() {
        let mut outline = rendered(0.0);

        outline
            .render(&article(), &article_state(), Measurements::new(0.0, 5000.0, 4000.0))
            .unwrap();

        assert!(outline.is_empty());
    }

    #[test]
    fn empty_content_with_zero_height_fits() {
        let mut outline = Outline::default();
        let result = outline.render(&[], &SharedState::new(), Measurements::new(0.0, 800.0, 0.0));
        assert_eq!(result, Ok(()));
        assert!(outline.is_empty());
    }

    #[test]
    fn overflowing_content_without_nodes_is_an_error() {
        let mut outline = Outline::default();
        let result = outline.render(&[], &SharedState::new(), Measurements::new(0.0, 800.0, 2000.0));
        assert_eq!(result, Err(OutlineError::NoContentNodes));
    }

    #[test]
    fn zero_viewport_is_an_error() {
        let mut outline = Outline::default();
        let result = outline.render(&article(), &article_state(), Measurements::new(0.0, 0.0, 4000.0));
        assert_eq!(result, Err(OutlineError::InvalidViewport(0.0)));
    }

    #[test]
    fn negative_content_height_is_an_error() {
        let mut outline = Outline::default();
        let result =
            outline.render(&article(), &article_state(), Measurements::new(0.0, 100.0, -5.0));
        assert_eq!(result, Err(OutlineError::InvalidContentHeight(-5.0)));
    }

    #[test]
    fn failed_render_keeps_previous_layout() {
        let mut outline = rendered(0.0);
        let before = outline.nodes().to_vec();

        let result = outline.render(&[], &SharedState::new(), Measurements::new(0.0, 1000.0, 9000.0));

        assert!(result.is_err());
        assert_eq!(outline.nodes(), before.as_slice());
    }

    #[test]
    fn tiny_node_height_never_negative() {
        let mut outline = Outline::default();
        let nodes = vec![node("a", 2.0), node("b", 9998.0)];
        outline
            .render(&nodes, &SharedState::new(), Measurements::new(0.0, 100.0, 10000.0))
            .unwrap();

        // 2px / 100 = 0.02 step, smaller than the gap
        assert_eq!(outline.nodes()[0].height, 0.0);
        assert_eq!(outline.nodes()[1].top, 0.02);
    }

    #[test]
    fn custom_gap_is_applied() {
        let mut outline = Outline::new(OutlineParams::new(3.0, 20.0));
        outline
            .render(&article(), &article_state(), Measurements::new(0.0, 1000.0, 4000.0))
            .unwrap();
        assert_eq!(outline.nodes()[0].height, 97.0);
    }

    #[test]
    fn rerender_reflects_new_measurements() {
        let mut outline = rendered(0.0);

        // Resize: viewport doubles, scale halves
        outline
            .render(&article(), &article_state(), Measurements::new(0.0, 2000.0, 4000.0))
            .unwrap();

        assert_eq!(outline.scale_factor().map(|s| s.get()), Some(2.0));
        assert_eq!(outline.nodes()[1].top, 200.0);
        assert_eq!(outline.visible_area().map(|a| a.height), Some(1000.0));
    }
}

// ===== Visible area =====

mod visible_area {
    use super::*;

    #[test]
    fn top_is_scroll_over_scale() {
        let mut outline = rendered(0.0);
        let area = outline.update_visible_area(1200.0).unwrap();
        assert_eq!(area.top, 300.0);
    }

    #[test]
    fn height_is_viewport_over_scale() {
        let mut outline = rendered(0.0);
        let area = outline.update_visible_area(0.0).unwrap();
        assert_eq!(area.height, 250.0);
    }

    #[test]
    fn height_is_floored_at_minimum() {
        let mut outline = Outline::default();
        outline
            .render(
                &[node("huge", 1_000_000.0)],
                &SharedState::new(),
                Measurements::new(0.0, 1000.0, 1_000_000.0),
            )
            .unwrap();

        // 1000 / 1000 = 1px, floored to 20
        assert_eq!(outline.visible_area().map(|a| a.height), Some(20.0));
    }

    #[test]
    fn negative_scroll_clamps_top_to_zero() {
        let mut outline = rendered(0.0);
        let area = outline.update_visible_area(-40.0).unwrap();
        assert_eq!(area.top, 0.0);
    }

    #[test]
    fn before_first_render_has_no_effect() {
        let mut outline = Outline::default();
        assert_eq!(outline.update_visible_area(500.0), None);
        assert_eq!(outline.visible_area(), None);
    }

    #[test]
    fn does_not_relayout_nodes() {
        let mut outline = rendered(0.0);
        let before = outline.nodes().to_vec();

        outline.update_visible_area(2500.0);

        assert_eq!(outline.nodes(), before.as_slice());
    }

    #[test]
    fn is_idempotent() {
        let mut outline = rendered(0.0);
        let first = outline.update_visible_area(640.0);
        let second = outline.update_visible_area(640.0);
        assert_eq!(first, second);
    }
}

// ===== Pointer interaction =====

mod pointer {
    use super::*;

    /// Outline whose indicator is exactly 40px high at scale 4.
    fn forty_pixel_indicator() -> Outline {
        let mut outline = Outline::default();
        outline
            .render(
                &[node("a", 8000.0)],
                &SharedState::new(),
                Measurements::new(0.0, 160.0, 640.0),
            )
            .unwrap();
        outline
    }

    #[test]
    fn body_press_then_move_scrolls_to_centered_target() {
        let mut outline = forty_pixel_indicator();
        assert_eq!(outline.visible_area().map(|a| a.height), Some(40.0));

        outline.pointer_down(PointerSource::OutlineBody, 100.0);
        let command = outline.pointer_move(300.0);

        assert_eq!(command, Some(ScrollCommand { offset: 1120.0 }));
    }

    #[test]
    fn body_press_jumps_on_same_event() {
        let mut outline = forty_pixel_indicator();

        let outcome = outline.pointer_down(PointerSource::OutlineBody, 300.0);

        assert!(outcome.consumed);
        assert_eq!(outcome.scroll, Some(ScrollCommand { offset: 1120.0 }));
        assert!(outline.is_dragging());
    }

    #[test]
    fn handle_press_does_not_jump() {
        let mut outline = rendered(800.0); // indicator top 200

        let outcome = outline.pointer_down(PointerSource::IndicatorHandle, 210.0);

        assert!(outcome.consumed);
        assert_eq!(outcome.scroll, None);
        assert!(outline.is_dragging());
    }

    #[test]
    fn handle_drag_preserves_grab_point() {
        let mut outline = rendered(800.0); // indicator top 200

        outline.pointer_down(PointerSource::IndicatorHandle, 210.0);
        let command = outline.pointer_move(260.0);

        // Indicator top should follow to 250 → document offset 1000
        assert_eq!(command, Some(ScrollCommand { offset: 1000.0 }));
    }

    #[test]
    fn move_while_idle_is_noop() {
        let mut outline = rendered(0.0);
        assert_eq!(outline.pointer_move(300.0), None);
    }

    #[test]
    fn pointer_up_stops_drag() {
        let mut outline = rendered(0.0);
        outline.pointer_down(PointerSource::OutlineBody, 100.0);

        outline.pointer_up();

        assert!(!outline.is_dragging());
        assert_eq!(outline.pointer_move(300.0), None);
    }

    #[test]
    fn pointer_up_while_idle_is_harmless() {
        let mut outline = rendered(0.0);
        outline.pointer_up();
        assert!(!outline.is_dragging());
    }

    #[test]
    fn press_is_ignored_when_nothing_is_drawn() {
        let mut outline = Outline::default();

        let outcome = outline.pointer_down(PointerSource::OutlineBody, 100.0);

        assert_eq!(outcome, PointerOutcome::ignored());
        assert!(!outline.is_dragging());
    }

    #[test]
    fn drag_uses_scale_of_latest_render() {
        let mut outline = rendered(0.0);
        outline.pointer_down(PointerSource::IndicatorHandle, 0.0);

        // Content grows mid-drag: 8000px in a 1000px viewport
        let mut grown = article();
        grown[2].outer_height = 6000.0;
        outline
            .render(&grown, &article_state(), Measurements::new(0.0, 1000.0, 8000.0))
            .unwrap();

        assert!(outline.is_dragging(), "render does not interrupt a drag");
        assert_eq!(outline.pointer_move(10.0), Some(ScrollCommand { offset: 80.0 }));
    }
}
