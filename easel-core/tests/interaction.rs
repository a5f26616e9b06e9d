//! Interaction Scenario Tests
//!
//! Drives the editor through complete user sequences:
//! - Adding elements and the resulting selection
//! - Pointer drags and the absolute-offset rule
//! - Deletion, background clicks and preview mode
//! - Panel round-trips and hover rule overwrites

use easel_core::{
    AdditionalField, Change, Editor, EditorEvent, HoverProperty, NodeContent, NodeId, NodeKind,
    Position, StyleField,
};

fn selection(editor: &Editor) -> Option<NodeId> {
    editor.state().selection().cloned()
}

fn add(editor: &mut Editor, kind: NodeKind) -> NodeId {
    editor.dispatch(&EditorEvent::AddElement { kind });
    selection(editor).expect("new node should be selected")
}

fn position(editor: &Editor, id: &NodeId) -> Position {
    editor
        .state()
        .scene()
        .node(id)
        .map(|n| n.position)
        .expect("node present")
}

fn press(editor: &mut Editor, node: &NodeId, x: f32, y: f32) -> Vec<Change> {
    editor.dispatch(&EditorEvent::PointerDown {
        node: node.clone(),
        x,
        y,
    })
}

fn drag_to(editor: &mut Editor, x: f32, y: f32) -> Vec<Change> {
    editor.dispatch(&EditorEvent::PointerMove { x, y })
}

// ============================================================================
// Element Factory
// ============================================================================

#[test]
fn test_each_kind_becomes_sole_selection() {
    let mut editor = Editor::default();
    for kind in NodeKind::ALL {
        let before = editor.state().scene().node_count();
        let id = add(&mut editor, kind);
        assert_eq!(editor.state().scene().node_count(), before + 1);
        let node = editor.state().scene().node(&id).expect("node");
        assert_eq!(node.kind(), kind);
        assert_eq!(selection(&editor), Some(id));
    }
}

#[test]
fn test_uploaded_image_is_added_and_selected() {
    let mut editor = Editor::default();
    let src = easel_core::image_data_url("image/png", &[1, 2, 3]).expect("data url");
    editor.dispatch(&EditorEvent::AddImage { src: src.clone() });
    let node = editor.state().selected_node().expect("selected image");
    assert_eq!(node.content, NodeContent::Image { src });
    assert_eq!(node.position, Position::new(10.0, 10.0));
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_follows_pointer_minus_initial_offset() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    // Node sits at (10, 10); grab it 5px right and 7px down of its corner.
    press(&mut editor, &id, 15.0, 17.0);

    let path = [(40.0, 40.0), (-20.0, 300.0), (123.5, 80.25)];
    for (x, y) in path {
        let changes = drag_to(&mut editor, x, y);
        assert_eq!(changes, vec![Change::NodeMoved(id.clone())]);
        assert_eq!(position(&editor, &id), Position::new(x - 5.0, y - 7.0));
    }
}

#[test]
fn test_second_drag_recaptures_offset() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    press(&mut editor, &id, 10.0, 10.0);
    drag_to(&mut editor, 110.0, 60.0);
    editor.dispatch(&EditorEvent::PointerUp);
    assert_eq!(position(&editor, &id), Position::new(110.0, 60.0));

    // Grab the moved node near its bottom-right corner.
    press(&mut editor, &id, 200.0, 150.0);
    drag_to(&mut editor, 210.0, 150.0);
    assert_eq!(position(&editor, &id), Position::new(120.0, 60.0));
}

#[test]
fn test_pointer_up_stops_movement() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Text);
    press(&mut editor, &id, 10.0, 10.0);
    drag_to(&mut editor, 50.0, 50.0);
    let changes = editor.dispatch(&EditorEvent::PointerUp);
    assert_eq!(changes, vec![Change::DragEnded]);

    assert!(drag_to(&mut editor, 400.0, 400.0).is_empty());
    assert_eq!(position(&editor, &id), Position::new(50.0, 50.0));
    assert!(editor.dispatch(&EditorEvent::PointerUp).is_empty());
}

#[test]
fn test_adding_does_not_start_a_drag() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    assert!(drag_to(&mut editor, 300.0, 300.0).is_empty());
    assert_eq!(position(&editor, &id), Position::new(10.0, 10.0));
}

// ============================================================================
// Selection, deletion, preview
// ============================================================================

#[test]
fn test_deleting_selected_node_empties_selection() {
    let mut editor = Editor::default();
    let keep = add(&mut editor, NodeKind::Text);
    let doomed = add(&mut editor, NodeKind::Shape);
    assert!(editor.panel().show_delete);

    let changes = editor.dispatch(&EditorEvent::DeleteSelected);
    assert!(changes.contains(&Change::NodeRemoved(doomed.clone())));
    assert_eq!(selection(&editor), None);
    assert!(!editor.state().scene().contains(&doomed));
    assert!(editor.state().scene().contains(&keep));
    assert!(!editor.panel().show_delete);
}

#[test]
fn test_delete_key_while_dragging_ends_drag() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    press(&mut editor, &id, 12.0, 12.0);
    let changes = editor.dispatch(&EditorEvent::Key {
        key: "Delete".to_string(),
    });
    assert!(changes.contains(&Change::DragEnded));
    assert!(editor.state().drag().is_none());
    assert!(editor.state().scene().is_empty());
}

#[test]
fn test_background_click_clears_selection_only() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Image);
    let changes = editor.dispatch(&EditorEvent::BackgroundClick);
    assert_eq!(changes, vec![Change::SelectionChanged]);
    assert_eq!(selection(&editor), None);
    assert!(editor.state().scene().contains(&id));
    assert!(editor.panel().is_empty());
}

#[test]
fn test_preview_clears_selection_and_panel() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Text);
    press(&mut editor, &id, 20.0, 20.0);

    let changes = editor.dispatch(&EditorEvent::TogglePreview);
    assert!(changes.contains(&Change::PreviewToggled(true)));
    assert!(changes.contains(&Change::SelectionChanged));
    assert_eq!(selection(&editor), None);
    assert!(editor.state().drag().is_none());
    assert!(editor.panel().is_empty());
}

#[test]
fn test_preview_suspends_editing() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::TogglePreview);

    assert!(press(&mut editor, &id, 10.0, 10.0).is_empty());
    assert!(drag_to(&mut editor, 99.0, 99.0).is_empty());
    assert!(editor
        .dispatch(&EditorEvent::Key {
            key: "Delete".to_string()
        })
        .is_empty());
    assert!(editor.dispatch(&EditorEvent::DeleteSelected).is_empty());
    assert!(editor
        .dispatch(&EditorEvent::AddElement {
            kind: NodeKind::Text
        })
        .is_empty());
    assert_eq!(editor.state().scene().node_count(), 1);
    assert_eq!(position(&editor, &id), Position::new(10.0, 10.0));
}

#[test]
fn test_leaving_preview_does_not_restore_selection() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::TogglePreview);
    let changes = editor.dispatch(&EditorEvent::TogglePreview);
    assert_eq!(changes, vec![Change::PreviewToggled(false)]);
    assert_eq!(selection(&editor), None);

    press(&mut editor, &id, 10.0, 10.0);
    assert_eq!(selection(&editor), Some(id));
}

// ============================================================================
// Property panel
// ============================================================================

#[test]
fn test_font_size_round_trips_through_style() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Text);
    assert_eq!(editor.panel().value_of(StyleField::FontSize), Some("16px"));

    editor.dispatch(&EditorEvent::SetStyleField {
        field: StyleField::FontSize,
        value: "20px".to_string(),
    });
    editor.dispatch(&EditorEvent::BackgroundClick);
    press(&mut editor, &id, 10.0, 10.0);
    assert_eq!(editor.panel().value_of(StyleField::FontSize), Some("20px"));
}

#[test]
fn test_panel_fields_depend_on_kind() {
    let mut editor = Editor::default();
    add(&mut editor, NodeKind::Shape);
    let panel = editor.panel();
    assert_eq!(panel.fields.len(), 3);
    assert_eq!(panel.value_of(StyleField::Width), Some("100px"));
    assert_eq!(panel.value_of(StyleField::BackgroundColor), Some("#007bff"));
    assert_eq!(panel.value_of(StyleField::FontFamily), None);
    assert!(panel.show_additional);
    assert_eq!(panel.additional.len(), 6);
    assert_eq!(panel.hover.len(), 2);

    add(&mut editor, NodeKind::Text);
    let panel = editor.panel();
    assert_eq!(panel.fields.len(), 7);
    assert_eq!(panel.value_of(StyleField::BackgroundColor), Some("#ffffff"));
    let family = panel
        .fields
        .iter()
        .find(|f| f.field == StyleField::FontFamily)
        .expect("font family field");
    assert_eq!(family.value, "Arial");
    assert_eq!(
        family.options,
        vec!["Arial", "Verdana", "Times New Roman", "Courier"]
    );
}

#[test]
fn test_additional_fields_write_and_read_back() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    for (field, raw) in [
        (AdditionalField::BorderRadius, "12"),
        (AdditionalField::Blur, "3"),
        (AdditionalField::BackgroundGradient, "linear-gradient(#fff, #000)"),
        (AdditionalField::Opacity, "0.4"),
    ] {
        let changes = editor.dispatch(&EditorEvent::SetAdditionalField {
            field,
            value: raw.to_string(),
        });
        assert_eq!(changes, vec![Change::NodeRestyled(id.clone())]);
    }

    let node = editor.state().scene().node(&id).expect("node");
    assert_eq!(node.style.get("border-radius"), Some("12px"));
    assert_eq!(node.style.get("filter"), Some("blur(3px)"));
    assert_eq!(node.style.get("background"), Some("linear-gradient(#fff, #000)"));
    assert_eq!(node.style.get("opacity"), Some("0.4"));

    let panel = editor.panel();
    let value = |field| {
        panel
            .additional
            .iter()
            .find(|a| a.field == field)
            .map(|a| a.value.clone())
    };
    assert_eq!(value(AdditionalField::BorderRadius).as_deref(), Some("12px"));
    assert_eq!(value(AdditionalField::Blur).as_deref(), Some("3"));
    assert_eq!(value(AdditionalField::Border).as_deref(), Some(""));
}

#[test]
fn test_gradient_replaces_shape_fill() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::SetAdditionalField {
        field: AdditionalField::BackgroundGradient,
        value: "red".to_string(),
    });

    let node = editor.state().scene().node(&id).expect("node");
    assert!(node.style.get("background-color").is_none());
    assert_eq!(
        node.inline_style(),
        "left: 10px; top: 10px; width: 100px; height: 100px; background: red"
    );
    assert_eq!(
        editor.panel().value_of(StyleField::BackgroundColor),
        Some("#ffffff")
    );
}

#[test]
fn test_fill_written_after_gradient_wins() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::SetAdditionalField {
        field: AdditionalField::BackgroundGradient,
        value: "linear-gradient(#fff, #000)".to_string(),
    });
    editor.dispatch(&EditorEvent::SetStyleField {
        field: StyleField::BackgroundColor,
        value: "#00ff00".to_string(),
    });

    let inline = editor
        .state()
        .scene()
        .node(&id)
        .expect("node")
        .inline_style();
    assert!(inline.ends_with(
        "background: linear-gradient(#fff, #000); background-color: #00ff00"
    ));
}

#[test]
fn test_style_values_cannot_inject_declarations() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);

    let changes = editor.dispatch(&EditorEvent::SetStyleField {
        field: StyleField::Width,
        value: "10px; display: none".to_string(),
    });
    assert!(changes.is_empty());

    let changes = editor.dispatch(&EditorEvent::SetAdditionalField {
        field: AdditionalField::BoxShadow,
        value: "0 0 4px #000; visibility: hidden".to_string(),
    });
    assert!(changes.is_empty());

    let node = editor.state().scene().node(&id).expect("node");
    assert_eq!(node.style.get("width"), Some("100px"));
    assert!(node.style.get("box-shadow").is_none());
    let inline = node.inline_style();
    assert!(!inline.contains("display"));
    assert!(!inline.contains("visibility"));
}

#[test]
fn test_typography_field_ignored_for_shapes() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    let changes = editor.dispatch(&EditorEvent::SetStyleField {
        field: StyleField::FontWeight,
        value: "bold".to_string(),
    });
    assert!(changes.is_empty());
    let node = editor.state().scene().node(&id).expect("node");
    assert!(node.style.get("font-weight").is_none());
}

// ============================================================================
// Hover rules
// ============================================================================

#[test]
fn test_hover_color_overwrites_hover_background() {
    let mut editor = Editor::default();
    let id = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::SetHover {
        property: HoverProperty::BackgroundColor,
        value: "#ff0000".to_string(),
    });
    editor.dispatch(&EditorEvent::SetHover {
        property: HoverProperty::Color,
        value: "#00ff00".to_string(),
    });

    assert_eq!(
        editor.state().hover().css_text(&id),
        Some(format!("#{id}:hover {{ color: #00ff00; }}"))
    );
    assert!(!editor.state().hover().stylesheet().contains("#ff0000"));

    let panel = editor.panel();
    let values: Vec<_> = panel.hover.iter().map(|h| h.value.as_str()).collect();
    assert_eq!(values, vec!["#00ff00", ""]);
}

#[test]
fn test_hover_rules_are_per_node_and_survive_restyling() {
    let mut editor = Editor::default();
    let first = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::SetHover {
        property: HoverProperty::Color,
        value: "red".to_string(),
    });
    editor.dispatch(&EditorEvent::SetStyleField {
        field: StyleField::BackgroundColor,
        value: "#123456".to_string(),
    });

    let second = add(&mut editor, NodeKind::Shape);
    editor.dispatch(&EditorEvent::SetHover {
        property: HoverProperty::BackgroundColor,
        value: "blue".to_string(),
    });

    let hover = editor.state().hover();
    assert_eq!(hover.len(), 2);
    assert!(hover.css_text(&first).is_some_and(|css| css.contains("color: red")));
    assert!(hover
        .css_text(&second)
        .is_some_and(|css| css.contains("background-color: blue")));

    editor.dispatch(&EditorEvent::DeleteSelected);
    assert_eq!(editor.state().hover().len(), 1);
}
