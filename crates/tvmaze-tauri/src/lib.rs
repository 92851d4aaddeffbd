//! TVmaze Show Browser Tauri Integration
//!
//! Provides a Tauri plugin that drives the show browser from a webview.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tvmaze_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then listen for render events and invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//! import { listen } from '@tauri-apps/api/event';
//!
//! await listen('tvmaze://shows', (e) => renderCards(e.payload.shows));
//! await listen('tvmaze://panel-open', (e) => attachPanel(e.payload.showId, e.payload.lines));
//! await listen('tvmaze://panel-close', (e) => removePanel(e.payload.showId));
//!
//! await invoke('plugin:tvmaze|search_shows', { term: 'girls' });
//! await invoke('plugin:tvmaze|toggle_episodes', { showId: 139 });
//! ```

use serde::Serialize;
use tauri::{
    AppHandle, Emitter, Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use tracing::warn;
use tvmaze_core::{EpisodeRecord, RenderSurface, ShowBrowser, ShowId, ShowRecord};

mod commands;
pub mod events;

use events::{
    PANEL_CLOSE_EVENT, PANEL_OPEN_EVENT, PanelClosePayload, PanelOpenPayload, SHOWS_EVENT,
    ShowCard, ShowsPayload,
};

/// Rendering surface that forwards every update to the webview as an event
pub struct EventSurface<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> EventSurface<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    fn emit<P: Serialize + Clone>(&self, event: &str, payload: P) {
        if let Err(e) = self.app.emit(event, payload) {
            warn!(error = %e, event, "failed to emit render event");
        }
    }
}

impl<R: Runtime> RenderSurface for EventSurface<R> {
    fn replace_shows(&mut self, shows: &[ShowRecord]) {
        let payload = ShowsPayload {
            shows: shows.iter().map(ShowCard::from).collect(),
        };
        self.emit(SHOWS_EVENT, payload);
    }

    fn attach_panel(&mut self, show: ShowId, episodes: &[EpisodeRecord]) {
        self.emit(PANEL_OPEN_EVENT, PanelOpenPayload::new(show, episodes));
    }

    fn remove_panel(&mut self, show: ShowId) {
        self.emit(PANEL_CLOSE_EVENT, PanelClosePayload { show_id: show });
    }
}

/// Managed state: one browsing session per app
///
/// `ShowBrowser` synchronizes internally, so no outer lock is needed.
pub struct BrowserState<R: Runtime> {
    pub(crate) browser: ShowBrowser<EventSurface<R>>,
}

impl<R: Runtime> BrowserState<R> {
    /// Create a new BrowserState with default client configuration
    ///
    /// # Errors
    /// Returns error string if HTTP client initialization fails
    pub fn new(app: AppHandle<R>) -> Result<Self, String> {
        let browser = ShowBrowser::new(EventSurface::new(app)).map_err(|e| e.to_string())?;
        Ok(Self { browser })
    }
}

/// Initialize the tvmaze plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("tvmaze")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::toggle_episodes
        ])
        .setup(|app, _api| {
            let state = BrowserState::new(app.clone()).map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use tvmaze_core::{PanelState, ShowRecord as Show};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tauri::Listener;
    use tauri::test::{MockRuntime, mock_app};

    fn capture(app: &tauri::App<MockRuntime>, event: &str) -> Arc<Mutex<Vec<Value>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        app.listen(event, move |e| {
            let payload = serde_json::from_str(e.payload()).expect("payload should be JSON");
            sink.lock().unwrap().push(payload);
        });
        received
    }

    #[test]
    fn test_browser_state_creation() {
        let app = mock_app();
        let state = BrowserState::new(app.handle().clone());
        assert!(state.is_ok());
    }

    #[test]
    fn test_replace_shows_emits_shows_event() {
        let app = mock_app();
        let shows_seen = capture(&app, SHOWS_EVENT);
        let panels_seen = capture(&app, PANEL_OPEN_EVENT);

        let show = ShowRecord::from_raw(&json!({ "id": 139, "name": "Girls" })).unwrap();
        let mut surface = EventSurface::new(app.handle().clone());
        surface.replace_shows(&[show]);

        let shows_seen = shows_seen.lock().unwrap();
        assert_eq!(shows_seen.len(), 1);
        assert_eq!(shows_seen[0]["shows"][0]["id"], 139);
        assert_eq!(shows_seen[0]["shows"][0]["name"], "Girls");
        assert!(panels_seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_panel_calls_emit_open_and_close_events() {
        let app = mock_app();
        let opened = capture(&app, PANEL_OPEN_EVENT);
        let closed = capture(&app, PANEL_CLOSE_EVENT);

        let episode =
            EpisodeRecord::from_raw(&json!({ "name": null, "season": 1, "number": 1 })).unwrap();
        let mut surface = EventSurface::new(app.handle().clone());
        surface.attach_panel(139, &[episode]);
        surface.remove_panel(139);

        assert_eq!(
            *opened.lock().unwrap(),
            vec![json!({ "showId": 139, "lines": ["Season 1, Episode 1: No Name"] })]
        );
        assert_eq!(*closed.lock().unwrap(), vec![json!({ "showId": 139 })]);
    }
}
