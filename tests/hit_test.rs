use circuitlink::config::EditorConfig;
use circuitlink::editor::{hit_test, Applied, ClickTarget, EditorSession, InteractionState, Mode};
use circuitlink::model::{Point, WireEnd};
use circuitlink::scene::demo_circuit;

#[test]
fn terminals_elements_wires_and_canvas() {
    let mut c = demo_circuit().unwrap();
    c.insert_wire(&"lightbulb-1-node-2".into(), &"lightbulb-2-node-1".into())
        .unwrap();
    let state = InteractionState::new();
    let cfg = EditorConfig::default();

    assert_eq!(
        hit_test(&c, &state, &cfg, Point::new(104.0, 143.0)),
        ClickTarget::Terminal("lightbulb-1-node-1".into())
    );
    assert_eq!(
        hit_test(&c, &state, &cfg, Point::new(120.0, 110.0)),
        ClickTarget::Element("lightbulb-1".into())
    );
    // Midpoint of the wire from (140, 140) to (202, 240).
    assert_eq!(
        hit_test(&c, &state, &cfg, Point::new(171.0, 190.0)),
        ClickTarget::WireBody("wire-0".into())
    );
    assert_eq!(
        hit_test(&c, &state, &cfg, Point::new(400.0, 20.0)),
        ClickTarget::Canvas
    );
}

#[test]
fn wires_are_not_hit_while_creating() {
    let mut c = demo_circuit().unwrap();
    c.insert_wire(&"lightbulb-1-node-2".into(), &"lightbulb-2-node-1".into())
        .unwrap();
    let state = InteractionState {
        mode: Mode::CreatingWire {
            start: "lightbulb-1-node-1".into(),
        },
        pointer: Point::default(),
    };
    assert_eq!(
        hit_test(&c, &state, &EditorConfig::default(), Point::new(171.0, 190.0)),
        ClickTarget::Canvas
    );
}

#[test]
fn dropping_an_edited_end_on_empty_canvas_deletes_the_wire() {
    let mut s = EditorSession::new(demo_circuit().unwrap(), EditorConfig::default());
    s.click_at(Point::new(140.0, 140.0)).unwrap();
    s.click_at(Point::new(202.0, 240.0)).unwrap();
    assert_eq!(s.circuit().wire_count(), 1);

    // Grab near the `to` end, then drop it where nothing is.
    s.click_at(Point::new(195.0, 229.0)).unwrap();
    assert!(matches!(
        s.mode(),
        Mode::EditingWire {
            end: WireEnd::To,
            ..
        }
    ));
    s.pointer_move(400.0, 400.0).unwrap();
    let applied = s.click_at(Point::new(400.0, 400.0)).unwrap();
    assert!(matches!(applied, Some(Applied::WireDeleted(_))));
    assert_eq!(s.circuit().wire_count(), 0);
}

#[test]
fn dropping_an_edited_end_on_an_element_body_deletes_the_wire() {
    let mut s = EditorSession::new(demo_circuit().unwrap(), EditorConfig::default());
    s.click_at(Point::new(140.0, 140.0)).unwrap();
    s.click_at(Point::new(202.0, 240.0)).unwrap();
    s.click_at(Point::new(195.0, 229.0)).unwrap();

    // Inside lightbulb-1, away from both of its terminals.
    let applied = s.click_at(Point::new(120.0, 110.0)).unwrap();
    assert!(matches!(applied, Some(Applied::WireDeleted(_))));
    assert_eq!(*s.mode(), Mode::Idle);
    assert_eq!(s.circuit().wire_count(), 0);
}

#[test]
fn custom_tolerances_apply() {
    let c = demo_circuit().unwrap();
    let tight = EditorConfig {
        terminal_hit_radius: 1.0,
        ..EditorConfig::default()
    };
    // Inside the body but 4 px from the terminal: a body hit with a tight radius.
    assert_eq!(
        hit_test(&c, &InteractionState::new(), &tight, Point::new(102.0, 136.0)),
        ClickTarget::Element("lightbulb-1".into())
    );
}
