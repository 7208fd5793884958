//! Tauri commands for the catalog controller
//!
//! Each command maps onto one controller operation. Network and
//! rendering failures are logged by the controller and deliberately not
//! surfaced to the frontend; the commands only fail if the plugin state
//! is missing.

use tauri::State;

use crate::ControllerState;

/// Forward a keystroke from the title input
///
/// Resets the debounce timer; the search executes once the quiet
/// period elapses with no further keystrokes.
#[tauri::command]
pub async fn search_keystroke(
    state: State<'_, ControllerState>,
    text: String,
) -> Result<(), String> {
    state.controller.keystroke(&text).await;
    Ok(())
}

/// Clear the search results and blank the title input
#[tauri::command]
pub async fn clear_search(state: State<'_, ControllerState>) -> Result<(), String> {
    state.controller.clear_search().await;
    Ok(())
}

/// Add a movie to the managed catalog by identifier
///
/// On success the managed list re-renders from a fresh fetch.
#[tauri::command]
pub async fn add_movie(
    state: State<'_, ControllerState>,
    identifier: String,
) -> Result<(), String> {
    state.controller.add_movie(&identifier).await;
    Ok(())
}

/// Re-fetch and re-render the managed movie list
#[tauri::command]
pub async fn refresh_movie_list(state: State<'_, ControllerState>) -> Result<(), String> {
    state.controller.refresh_managed_list().await;
    Ok(())
}
