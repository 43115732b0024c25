//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            match state.polygon.nearest_point(pos, state.options.pick_radius) {
                Some(hit) => vec![AppCommand::SelectPoint { index: hit.index }],
                None => vec![AppCommand::AddPoint { pos }],
            }
        }
        AppIntent::PointerDragged { pos } => {
            if state.selection.selected_index.is_some() {
                vec![AppCommand::MoveSelectedPoint { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased | AppIntent::DragCancelRequested => {
            if state.selection.selected_index.is_some() {
                vec![AppCommand::ClearSelection]
            } else {
                Vec::new()
            }
        }
        AppIntent::ContextClicked { pos } => state
            .polygon
            .nearest_point(pos, state.options.pick_radius)
            .map(|hit| vec![AppCommand::DeletePoint { index: hit.index }])
            .unwrap_or_default(),
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearSelection, AppCommand::ClearPoints],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
