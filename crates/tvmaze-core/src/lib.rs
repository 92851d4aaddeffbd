//! TVmaze Show Browser Core Library
//!
//! Search the TVmaze catalog, normalize whatever upstream returns into
//! display-safe records and drive the per-show episode panel.
//!
//! # Overview
//!
//! - [`CatalogClient`] wraps the two read-only endpoints
//!   (`/search/shows` and `/shows/{id}/episodes`)
//! - [`normalize`] projects raw JSON onto a [`DefaultSpec`], filling every
//!   missing field with its default
//! - [`PanelController`] decides whether a click opens, switches or closes
//!   the single episode panel
//! - [`ShowBrowser`] wires the three together and renders into any
//!   [`RenderSurface`]
//!
//! # Example
//!
//! ```no_run
//! use tvmaze_core::{EpisodeRecord, RenderSurface, ShowBrowser, ShowId, ShowRecord};
//!
//! struct Stdout;
//!
//! impl RenderSurface for Stdout {
//!     fn replace_shows(&mut self, shows: &[ShowRecord]) {
//!         for show in shows {
//!             println!("[{}] {}", show.id, show.name);
//!         }
//!     }
//!
//!     fn attach_panel(&mut self, _show: ShowId, episodes: &[EpisodeRecord]) {
//!         for episode in episodes {
//!             println!("  {}", episode.line());
//!         }
//!     }
//!
//!     fn remove_panel(&mut self, _show: ShowId) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> tvmaze_core::Result<()> {
//!     let browser = ShowBrowser::new(Stdout)?;
//!     let shows = browser.search_and_display("girls").await;
//!     if let Some(show) = shows.first() {
//!         browser.toggle_episodes(show.id).await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! Upstream failures never reach the rendering surface. They are logged
//! through `tracing` and turned into an empty show list, or a panel that
//! stays closed.

mod browser;
mod client;
mod error;
mod normalize;
mod panel;
mod types;
pub mod url;

// Re-export client types
pub use client::{CatalogClient, ClientConfig};

// Re-export error types
pub use error::{Result, TvmazeError};

// Re-export normalizer
pub use normalize::{DefaultSpec, normalize};

// Re-export panel state machine
pub use panel::{PanelController, PanelState, PendingOpen, Resolution, ToggleAction};

// Re-export main browsing API
pub use browser::{RenderSurface, ShowBrowser};

// Re-export data types
pub use types::{
    EpisodeNumber, EpisodeRecord, MISSING_EPISODE_NAME, MISSING_EPISODE_NUMBER,
    MISSING_IMAGE_URL, MISSING_SHOW_ID, MISSING_SHOW_NAME, MISSING_SUMMARY, SearchHit, ShowId,
    ShowImage, ShowRecord,
};
