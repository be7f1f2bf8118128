use super::*;
use crate::draw::recording::{DrawCommand, RecordingSurface};
use crate::draw::{BACKGROUND, BLUE, Canvas, Color, FontDescriptor, RED, StyleState, Surface};
use crate::input::{EventKind, Key, MouseButton, Tool};
use crate::util::Point;

fn create_controller() -> ToolController {
    ToolController::new(Point::ORIGIN, StyleState::new(RED, 5.0), FontDescriptor::default())
}

fn drag<S: Surface>(controller: &mut ToolController, surface: &mut S, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    controller
        .on_pointer_press(surface, MouseButton::Left, Point::new(first.0, first.1))
        .unwrap();
    for &(x, y) in rest {
        controller
            .on_pointer_move(surface, Point::new(x, y))
            .unwrap();
    }
    let last = points.last().unwrap();
    controller
        .on_pointer_release(surface, MouseButton::Left, Point::new(last.0, last.1))
        .unwrap();
}

fn stroke_colors(surface: &RecordingSurface) -> Vec<Color> {
    surface
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::StrokeColor(color) => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn starts_idle_with_no_handlers() {
    let controller = create_controller();
    assert!(controller.is_idle());
    assert!(controller.registered_handlers().is_empty());
}

#[test]
fn selecting_a_tool_twice_returns_to_idle() {
    for tool in Tool::ALL {
        let mut controller = create_controller();
        controller.select_tool(tool);
        assert_eq!(controller.active_tool(), tool);
        controller.select_tool(tool);
        assert!(controller.is_idle(), "{tool:?} did not toggle off");
        assert!(controller.registered_handlers().is_empty());
    }
}

#[test]
fn switching_tools_leaves_only_the_new_handlers() {
    for first in Tool::ALL {
        for second in Tool::ALL {
            if first == second {
                continue;
            }
            let mut controller = create_controller();
            controller.select_tool(first);
            controller.select_tool(second);
            assert_eq!(controller.registered_handlers(), &second.handlers());
            assert!(
                controller
                    .registered_handlers()
                    .iter()
                    .all(|h| h.tool == second)
            );
        }
    }
}

#[test]
fn previous_tool_handlers_never_fire_after_switch() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Pen);
    controller.select_tool(Tool::Text);

    controller
        .on_pointer_move(&mut surface, Point::new(5.0, 5.0))
        .unwrap();
    controller
        .on_pointer_release(&mut surface, MouseButton::Left, Point::new(5.0, 5.0))
        .unwrap();

    assert!(surface.commands.is_empty());
    assert!(controller.registered_handlers().handler_for(EventKind::Move).is_none());
}

#[test]
fn idle_ignores_pointer_input() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    drag(&mut controller, &mut surface, &[(0.0, 0.0), (5.0, 5.0)]);
    assert!(surface.commands.is_empty());
    assert!(controller.gesture().is_none());
}

#[test]
fn pen_draws_one_segment_per_move_in_canvas_coordinates() {
    let mut controller =
        ToolController::new(Point::new(100.0, 50.0), StyleState::new(RED, 5.0), FontDescriptor::default());
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Pen);

    drag(
        &mut controller,
        &mut surface,
        &[(110.0, 60.0), (120.0, 60.0), (130.0, 70.0)],
    );

    let segments: Vec<_> = surface
        .commands
        .windows(2)
        .filter_map(|pair| match pair {
            [DrawCommand::MoveTo(from), DrawCommand::LineTo(to)] => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        segments,
        vec![
            (Point::new(10.0, 10.0), Point::new(20.0, 10.0)),
            (Point::new(20.0, 10.0), Point::new(30.0, 20.0)),
        ]
    );
    // Release strokes the open path and begins a fresh one.
    assert_eq!(
        &surface.commands[surface.commands.len() - 2..],
        &[DrawCommand::Stroke, DrawCommand::BeginPath]
    );
    assert!(controller.gesture().is_none());
}

#[test]
fn controller_captures_surface_origin() {
    let surface = RecordingSurface::with_origin(Point::new(8.0, 16.0));
    let mut controller =
        ToolController::for_surface(&surface, StyleState::default(), FontDescriptor::default());
    let mut surface = surface;
    controller.select_tool(Tool::Line);
    drag(&mut controller, &mut surface, &[(8.0, 16.0), (18.0, 26.0)]);
    assert!(surface.commands.contains(&DrawCommand::MoveTo(Point::ORIGIN)));
    assert!(surface.commands.contains(&DrawCommand::LineTo(Point::new(10.0, 10.0))));
}

#[test]
fn shape_tools_draw_only_on_release() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Rectangle);

    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(40.0, 40.0))
        .unwrap();
    controller
        .on_pointer_move(&mut surface, Point::new(30.0, 30.0))
        .unwrap();
    assert!(surface.commands.is_empty());

    controller
        .on_pointer_release(&mut surface, MouseButton::Left, Point::new(10.0, 20.0))
        .unwrap();
    assert_eq!(
        surface.marks(),
        vec![&DrawCommand::StrokeRect {
            origin: Point::new(10.0, 20.0),
            width: 30.0,
            height: 20.0,
        }]
    );
}

#[test]
fn second_press_during_gesture_is_ignored() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Line);

    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(1.0, 1.0))
        .unwrap();
    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(50.0, 50.0))
        .unwrap();
    controller
        .on_pointer_release(&mut surface, MouseButton::Left, Point::new(9.0, 9.0))
        .unwrap();

    assert!(surface.commands.contains(&DrawCommand::MoveTo(Point::new(1.0, 1.0))));
    assert!(!surface.commands.contains(&DrawCommand::MoveTo(Point::new(50.0, 50.0))));
}

#[test]
fn non_left_buttons_do_not_start_gestures() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Pen);
    controller
        .on_pointer_press(&mut surface, MouseButton::Right, Point::ORIGIN)
        .unwrap();
    assert!(controller.gesture().is_none());
}

#[test]
fn switching_tools_drops_the_gesture_in_flight() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Line);
    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::ORIGIN)
        .unwrap();
    controller.select_tool(Tool::Arrow);
    assert!(controller.gesture().is_none());

    controller
        .on_pointer_release(&mut surface, MouseButton::Left, Point::new(5.0, 5.0))
        .unwrap();
    assert!(surface.commands.is_empty());
}

#[test]
fn eraser_overrides_color_and_locks_picker() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Eraser);

    assert!(controller.picker().is_locked());
    assert_eq!(controller.style().stroke_color(), BACKGROUND);
    assert!(!controller.pick_color(BLUE));
    assert_eq!(controller.style().chosen_color(), RED);

    drag(&mut controller, &mut surface, &[(0.0, 0.0), (4.0, 4.0)]);
    assert_eq!(stroke_colors(&surface), vec![BACKGROUND]);
}

#[test]
fn leaving_eraser_restores_the_picker_color() {
    let mut controller = create_controller();
    controller.pick_color(BLUE);
    controller.select_tool(Tool::Eraser);
    controller.select_tool(Tool::Pen);

    assert!(!controller.picker().is_locked());
    assert_eq!(controller.style().stroke_color(), BLUE);

    let mut surface = RecordingSurface::default();
    drag(&mut controller, &mut surface, &[(0.0, 0.0), (4.0, 4.0)]);
    assert_eq!(stroke_colors(&surface), vec![BLUE]);

    // Toggling the eraser off to idle restores as well.
    controller.select_tool(Tool::Eraser);
    controller.select_tool(Tool::Eraser);
    assert!(controller.is_idle());
    assert_eq!(controller.style().stroke_color(), BLUE);
}

#[test]
fn text_press_opens_overlay_without_gesture() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Text);

    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(12.0, 30.0))
        .unwrap();
    assert!(controller.overlay().is_visible());
    assert!(controller.is_awaiting_text());
    assert!(controller.gesture().is_none());
}

#[test]
fn confirmed_text_is_drawn_at_anchor_in_stroke_color() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Text);
    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(12.0, 30.0))
        .unwrap();

    for c in "hi".chars() {
        controller.on_key_press(&mut surface, Key::Char(c)).unwrap();
    }
    controller.on_key_press(&mut surface, Key::Return).unwrap();

    assert!(surface.commands.contains(&DrawCommand::FillColor(RED)));
    assert_eq!(
        surface.marks(),
        vec![&DrawCommand::FillText {
            text: "hi".to_string(),
            at: Point::new(12.0, 30.0),
        }]
    );
    assert!(!controller.overlay().is_visible());
    assert!(!controller.is_awaiting_text());
}

#[test]
fn blank_text_is_discarded_and_overlay_removed() {
    for input in ["", "   \t "] {
        let mut controller = create_controller();
        let mut canvas = Canvas::new(64, 64).unwrap();
        let before = canvas.pixels().unwrap();

        controller.select_tool(Tool::Text);
        controller
            .on_pointer_press(&mut canvas, MouseButton::Left, Point::new(10.0, 20.0))
            .unwrap();
        for c in input.chars() {
            controller.on_key_press(&mut canvas, Key::Char(c)).unwrap();
        }
        controller.on_key_press(&mut canvas, Key::Return).unwrap();

        assert_eq!(canvas.pixels().unwrap(), before);
        assert!(!controller.overlay().is_visible());
    }
}

#[test]
fn text_press_while_pending_moves_the_entry() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Text);
    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(5.0, 5.0))
        .unwrap();
    controller.on_key_press(&mut surface, Key::Char('a')).unwrap();

    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::new(40.0, 25.0))
        .unwrap();
    controller.on_key_press(&mut surface, Key::Char('b')).unwrap();
    controller.on_key_press(&mut surface, Key::Return).unwrap();

    assert_eq!(
        surface.marks(),
        vec![&DrawCommand::FillText {
            text: "b".to_string(),
            at: Point::new(40.0, 25.0),
        }]
    );
    assert!(!controller.is_awaiting_text());
}

#[test]
fn single_click_leaves_canvas_blank() {
    for tool in [Tool::Pen, Tool::Eraser, Tool::Rectangle, Tool::Ellipse, Tool::Line] {
        let mut controller = create_controller();
        let mut canvas = Canvas::new(40, 40).unwrap();
        controller.select_tool(tool);
        drag(&mut controller, &mut canvas, &[(20.0, 20.0), (20.0, 20.0)]);
        assert!(
            canvas.pixels().unwrap().iter().all(|b| *b == 0),
            "{tool:?} marked the canvas on a click"
        );
    }
}

#[test]
fn escape_does_not_dismiss_text_entry() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Text);
    controller
        .on_pointer_press(&mut surface, MouseButton::Left, Point::ORIGIN)
        .unwrap();
    controller.on_key_press(&mut surface, Key::Escape).unwrap();
    assert!(controller.overlay().is_visible());
}

#[test]
fn keys_without_pending_entry_are_ignored() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Text);
    controller.on_key_press(&mut surface, Key::Return).unwrap();
    assert!(surface.commands.is_empty());
}

#[test]
fn eraser_paints_background_over_ink_on_canvas() {
    let mut controller = create_controller();
    let mut canvas = Canvas::new(40, 40).unwrap();

    controller.select_tool(Tool::Pen);
    drag(&mut controller, &mut canvas, &[(0.0, 20.0), (40.0, 20.0)]);
    assert_eq!(canvas.pixel_at(20, 20).unwrap(), [255, 0, 0, 255]);

    controller.select_tool(Tool::Eraser);
    drag(&mut controller, &mut canvas, &[(0.0, 20.0), (40.0, 20.0)]);
    assert_eq!(canvas.pixel_at(20, 20).unwrap(), [255, 255, 255, 255]);
}

#[test]
fn clear_canvas_keeps_tool_and_style() {
    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.select_tool(Tool::Arrow);
    controller.clear_canvas(&mut surface).unwrap();
    assert_eq!(controller.active_tool(), Tool::Arrow);
    assert_eq!(controller.style().stroke_color(), RED);
    assert_eq!(surface.marks().len(), 1);
}

#[test]
fn replay_script_drives_the_controller() {
    let script = r##"[
        { "type": "color", "value": "#0000ff" },
        { "type": "line_width", "value": 2 },
        { "type": "select", "tool": "line" },
        { "type": "press", "x": 0, "y": 0 },
        { "type": "move", "x": 3, "y": 3 },
        { "type": "release", "x": 6, "y": 6 },
        { "type": "select", "tool": "text" },
        { "type": "press", "x": 1, "y": 9 },
        { "type": "type", "text": "ok" },
        { "type": "key", "key": "Enter" }
    ]"##;
    let events = parse_script(script).unwrap();
    assert_eq!(events.len(), 10);

    let mut controller = create_controller();
    let mut surface = RecordingSurface::default();
    controller.replay(&mut surface, &events).unwrap();

    assert_eq!(controller.active_tool(), Tool::Text);
    assert_eq!(controller.style().stroke_color(), BLUE);
    assert_eq!(controller.style().line_width(), 2.0);
    assert!(surface.commands.contains(&DrawCommand::LineTo(Point::new(6.0, 6.0))));
    assert!(surface.commands.contains(&DrawCommand::FillText {
        text: "ok".to_string(),
        at: Point::new(1.0, 9.0),
    }));
}

#[test]
fn replay_rejects_unknown_event_types() {
    assert!(parse_script(r#"[{ "type": "teleport" }]"#).is_err());
}
