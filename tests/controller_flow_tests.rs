use bezier_hodograph_editor::{
    AppCommand, AppController, AppIntent, AppState, ControlPolygon, EditorOptions,
};
use glam::Vec2;

fn press_drag_release(
    controller: &mut AppController,
    state: &mut AppState,
    from: Vec2,
    to: &[Vec2],
) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos: from })
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    for pos in to {
        controller
            .handle_intent(state, AppIntent::PointerDragged { pos: *pos })
            .expect("PointerDragged sollte ohne Fehler durchlaufen");
    }
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    press_drag_release(controller, state, pos, &[]);
}

#[test]
fn test_press_on_empty_area_appends_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    click(&mut controller, &mut state, Vec2::new(200.0, 50.0));

    assert_eq!(
        state.polygon.points(),
        &[Vec2::new(100.0, 100.0), Vec2::new(200.0, 50.0)]
    );
    assert_eq!(state.selection.selected_index, None);
    assert!(state.can_undo());
}

#[test]
fn test_press_near_point_selects_instead_of_adding() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![Vec2::new(100.0, 100.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(104.0, 103.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.selection.selected_index, Some(0));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SelectPoint { index } => assert_eq!(*index, 0),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_press_exactly_at_pick_radius_adds_new_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![Vec2::new(100.0, 100.0)]);
    let radius = state.options.pick_radius;

    click(&mut controller, &mut state, Vec2::new(100.0 + radius, 100.0));

    assert_eq!(state.point_count(), 2);
}

#[test]
fn test_drag_moves_selected_point_and_release_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![
        Vec2::new(0.0, 100.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 100.0),
    ]);

    press_drag_release(
        &mut controller,
        &mut state,
        Vec2::new(51.0, 1.0),
        &[Vec2::new(60.0, 20.0), Vec2::new(70.0, 40.0)],
    );

    assert_eq!(state.polygon.get(1), Some(Vec2::new(70.0, 40.0)));
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.selection.selected_index, None);
}

#[test]
fn test_whole_drag_is_undone_in_one_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    press_drag_release(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        &[
            Vec2::new(20.0, 20.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(40.0, 40.0),
        ],
    );
    assert_eq!(state.polygon.get(0), Some(Vec2::new(40.0, 40.0)));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.polygon.get(0), Some(Vec2::new(10.0, 10.0)));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert!(state.polygon.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert_eq!(state.polygon.points(), &[Vec2::new(40.0, 40.0)]);
}

#[test]
fn test_drag_without_selection_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![Vec2::new(0.0, 0.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(5.0, 5.0),
            },
        )
        .expect("PointerDragged sollte robust sein");

    assert_eq!(state.polygon.get(0), Some(Vec2::ZERO));
    assert!(!state.can_undo());
}

#[test]
fn test_context_click_deletes_nearest_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 0.0),
    ]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextClicked {
                pos: Vec2::new(48.0, 2.0),
            },
        )
        .expect("ContextClicked sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.polygon.points(),
        &[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]
    );
}

#[test]
fn test_context_click_on_empty_area_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![Vec2::new(0.0, 0.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextClicked {
                pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("ContextClicked sollte robust sein");

    assert_eq!(state.point_count(), 1);
    assert!(!state.can_undo());
}

#[test]
fn test_clear_points_empties_polygon_and_is_undoable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    click(&mut controller, &mut state, Vec2::new(80.0, 10.0));

    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .expect("ClearPointsRequested sollte ohne Fehler durchlaufen");
    assert!(state.polygon.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 2);
}

#[test]
fn test_escape_during_drag_releases_point_at_last_position() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![Vec2::new(10.0, 10.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(30.0, 10.0),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::DragCancelRequested)
        .expect("DragCancelRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.selected_index, None);
    assert_eq!(state.polygon.get(0), Some(Vec2::new(30.0, 10.0)));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_invalid_step_count_in_options_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut options = state.options.clone();
    options.step_count = 0;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.options.step_count, 100);
}

#[test]
fn test_context_delete_during_drag_keeps_dragged_point_selected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.polygon = ControlPolygon::from_points(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 0.0),
    ]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(100.0, 0.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.selected_index, Some(2));

    controller
        .handle_intent(&mut state, AppIntent::ContextClicked { pos: Vec2::ZERO })
        .expect("ContextClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.selected_index, Some(1));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(120.0, 10.0),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.polygon.points(),
        &[Vec2::new(50.0, 0.0), Vec2::new(120.0, 10.0)]
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextClicked {
                pos: Vec2::new(120.0, 10.0),
            },
        )
        .expect("ContextClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.selected_index, None);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                pos: Vec2::new(0.0, 0.0),
            },
        )
        .expect("PointerDragged sollte robust sein");
    assert_eq!(state.polygon.points(), &[Vec2::new(50.0, 0.0)]);
}

#[test]
fn test_options_changed_applies_and_persists_to_options_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options_path = std::env::temp_dir().join(format!(
        "bezier_hodograph_editor_flow_{}.toml",
        std::process::id()
    ));
    let mut options = state.options.clone();
    options.step_count = 20;

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options.clone()),
            },
        )
        .expect("Gültige Optionen sollten übernommen werden");

    assert_eq!(state.options, options);
    assert_eq!(state.options.curve_evaluator().step_count(), 20);
    assert_eq!(EditorOptions::load_from_file(&state.options_path), options);

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("Zurücksetzen sollte ohne Fehler durchlaufen");
    assert_eq!(state.options, EditorOptions::default());

    let _ = std::fs::remove_file(&state.options_path);
}

#[test]
fn test_oversized_step_count_in_options_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut options = state.options.clone();
    options.step_count = 4_000_000_000;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.options.step_count, 100);
}

#[test]
fn test_render_scene_follows_edits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for pos in [
        Vec2::new(0.0, 100.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 100.0),
    ] {
        click(&mut controller, &mut state, pos);
    }

    let scene = controller.build_render_scene(&state);
    assert!(scene.has_curve());
    assert_eq!(scene.curve_panel.curve.len(), 101);
    assert_eq!(scene.hodograph_panel.points.len(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextClicked {
                pos: Vec2::new(50.0, 0.0),
            },
        )
        .expect("ContextClicked sollte ohne Fehler durchlaufen");

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.curve_panel.points.len(), 2);
    assert_eq!(scene.hodograph_panel.points.len(), 1);
    assert!(scene.hodograph_panel.curve.is_empty());
}
