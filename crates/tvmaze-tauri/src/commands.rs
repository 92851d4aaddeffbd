//! Tauri commands for the show browser
//!
//! Results are also pushed to the webview as events by the
//! [`EventSurface`](crate::EventSurface); the return values are for
//! callers that prefer request/response.

use tauri::{AppHandle, Manager, Runtime};
use tvmaze_core::{PanelState, ShowId, ShowRecord};

use crate::BrowserState;

/// Search shows and render them
///
/// # Arguments
/// * `app` - Handle used to reach the managed `BrowserState`
/// * `term` - Free-text query, passed to upstream as-is
///
/// # Returns
/// The normalized shows; empty when upstream failed
#[tauri::command]
pub async fn search_shows<R: Runtime>(app: AppHandle<R>, term: String) -> Vec<ShowRecord> {
    let state = app.state::<BrowserState<R>>();
    state.browser.search_and_display(&term).await
}

/// Toggle the episode panel of a show
///
/// # Arguments
/// * `app` - Handle used to reach the managed `BrowserState`
/// * `show_id` - Id of the clicked show card
///
/// # Returns
/// Panel state after the click has been handled
#[tauri::command]
pub async fn toggle_episodes<R: Runtime>(app: AppHandle<R>, show_id: ShowId) -> PanelState {
    let state = app.state::<BrowserState<R>>();
    state.browser.toggle_episodes(show_id).await
}
