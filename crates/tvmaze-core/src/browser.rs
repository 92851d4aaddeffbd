//! High-level browsing API
//!
//! Combines the catalog client, the normalizer and the panel controller,
//! and pushes results into a [`RenderSurface`].

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::client::{CatalogClient, ClientConfig};
use crate::error::Result;
use crate::panel::{PanelController, PanelState, Resolution, ToggleAction};
use crate::types::{EpisodeRecord, ShowId, ShowRecord};

/// Where normalized records end up (a DOM, a webview, a terminal...)
pub trait RenderSurface {
    /// Replace the whole show list
    fn replace_shows(&mut self, shows: &[ShowRecord]);

    /// Attach an episode panel to the card of `show`
    fn attach_panel(&mut self, show: ShowId, episodes: &[EpisodeRecord]);

    /// Remove the episode panel of `show`
    fn remove_panel(&mut self, show: ShowId);
}

/// Search-and-browse session over the catalog
///
/// All methods take `&self`. Locks are never held across a network call,
/// so overlapping actions interleave and stale results are detected when
/// their fetch resolves. Lock order is panel, then surface.
pub struct ShowBrowser<S> {
    client: CatalogClient,
    panel: Mutex<PanelController>,
    surface: Mutex<S>,
    search_seq: AtomicU64,
}

impl<S: RenderSurface> ShowBrowser<S> {
    /// Create a browser with default client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(surface: S) -> Result<Self> {
        Ok(Self::with_client(CatalogClient::new()?, surface))
    }

    /// Create a browser with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig, surface: S) -> Result<Self> {
        Ok(Self::with_client(CatalogClient::with_config(config)?, surface))
    }

    pub fn with_client(client: CatalogClient, surface: S) -> Self {
        Self {
            client,
            panel: Mutex::new(PanelController::new()),
            surface: Mutex::new(surface),
            search_seq: AtomicU64::new(0),
        }
    }

    /// Current episode panel state
    pub async fn panel_state(&self) -> PanelState {
        self.panel.lock().await.state()
    }

    /// Run `f` against the rendering surface
    pub async fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.surface.lock().await)
    }

    /// Fetch and normalize shows for a term
    ///
    /// Upstream failures are logged and yield an empty list.
    pub async fn fetch_shows(&self, term: &str) -> Vec<ShowRecord> {
        let hits = match self.client.search_shows(term).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, term, "show search failed, showing no results");
                return Vec::new();
            }
        };

        hits.iter()
            .filter_map(|hit| match ShowRecord::from_raw(&hit.show) {
                Ok(show) => Some(show),
                Err(e) => {
                    warn!(error = %e, "skipping undisplayable show");
                    None
                }
            })
            .collect()
    }

    /// Fetch and normalize episodes for a show
    ///
    /// `None` means the fetch failed (already logged).
    pub async fn fetch_episodes(&self, show: ShowId) -> Option<Vec<EpisodeRecord>> {
        let raw = match self.client.list_episodes(show).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, show, "episode fetch failed, panel stays closed");
                return None;
            }
        };

        let episodes = raw
            .iter()
            .filter_map(|episode| match EpisodeRecord::from_raw(episode) {
                Ok(episode) => Some(episode),
                Err(e) => {
                    warn!(error = %e, show, "skipping undisplayable episode");
                    None
                }
            })
            .collect();
        Some(episodes)
    }

    /// Handle a search submission
    ///
    /// Closes any open episode panel and replaces the show list. If a newer
    /// search started while this one was in flight, nothing is rendered.
    /// Returns the normalized shows either way.
    pub async fn search_and_display(&self, term: &str) -> Vec<ShowRecord> {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let shows = self.fetch_shows(term).await;

        if self.search_seq.load(Ordering::SeqCst) != seq {
            debug!(term, "discarding results of superseded search");
            return shows;
        }

        let mut panel = self.panel.lock().await;
        let mut surface = self.surface.lock().await;
        if let Some(open) = panel.reset() {
            surface.remove_panel(open);
        }
        surface.replace_shows(&shows);
        shows
    }

    /// Handle a click on the "Episodes" affordance of `show`
    ///
    /// Returns the panel state once this click has been fully handled.
    pub async fn toggle_episodes(&self, show: ShowId) -> PanelState {
        let action = {
            let mut panel = self.panel.lock().await;
            let action = panel.click(show);
            if let Some(previous) = action.panel_to_remove() {
                self.surface.lock().await.remove_panel(previous);
            }
            action
        };

        let pending = match action {
            ToggleAction::Close { .. } => return self.panel_state().await,
            ToggleAction::Open { pending, .. } => pending,
        };

        let fetched = self.fetch_episodes(pending.show()).await;

        let mut panel = self.panel.lock().await;
        match panel.resolve(pending, fetched) {
            Resolution::Render { show, content } => {
                self.surface.lock().await.attach_panel(show, &content);
            }
            Resolution::Stale { show } => {
                debug!(show, "discarding episodes of superseded click");
            }
            Resolution::Failed { .. } => {}
        }
        panel.state()
    }
}
