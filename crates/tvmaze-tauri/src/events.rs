//! Event payloads pushed to the webview
//!
//! The frontend listens for these and patches its DOM; it never has to
//! look at a raw upstream record.

use serde::Serialize;
use tvmaze_core::{EpisodeRecord, ShowId, ShowRecord};

/// Emitted with the full, normalized show list after a search
pub const SHOWS_EVENT: &str = "tvmaze://shows";
/// Emitted when an episode panel must be attached to a show card
pub const PANEL_OPEN_EVENT: &str = "tvmaze://panel-open";
/// Emitted when an episode panel must be removed
pub const PANEL_CLOSE_EVENT: &str = "tvmaze://panel-close";

/// Everything a show card needs, pre-formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCard {
    pub id: ShowId,
    pub name: String,
    /// Summary HTML as sent by upstream
    pub summary: String,
    /// Summary without markup, for tooltips
    pub summary_text: String,
    pub image_url: String,
    pub image_alt: String,
    /// False for shows without a catalog id; hide the button
    pub has_episodes: bool,
}

impl From<&ShowRecord> for ShowCard {
    fn from(show: &ShowRecord) -> Self {
        Self {
            id: show.id,
            name: show.name.clone(),
            summary: show.summary.clone(),
            summary_text: show.summary_text(),
            image_url: show.image.medium.clone(),
            image_alt: show.poster_alt(),
            has_episodes: show.has_catalog_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowsPayload {
    pub shows: Vec<ShowCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOpenPayload {
    pub show_id: ShowId,
    /// One display line per episode
    pub lines: Vec<String>,
}

impl PanelOpenPayload {
    pub fn new(show_id: ShowId, episodes: &[EpisodeRecord]) -> Self {
        Self {
            show_id,
            lines: episodes.iter().map(EpisodeRecord::line).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelClosePayload {
    pub show_id: ShowId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_show_card_from_sparse_show() {
        let show = ShowRecord::from_raw(&json!({ "summary": "<p>Hi <i>there</i></p>" })).unwrap();
        let card = ShowCard::from(&show);
        assert_eq!(card.name, "No Name Found");
        assert_eq!(card.summary_text, "Hi there");
        assert_eq!(card.image_url, "https://tinyurl.com/tv-missing");
        assert_eq!(card.image_alt, "Poster for No Name Found");
        assert!(!card.has_episodes);
    }

    #[test]
    fn test_shows_payload_serialization() {
        let show = ShowRecord::from_raw(&json!({ "id": 139, "name": "Girls" })).unwrap();
        let payload = ShowsPayload {
            shows: vec![ShowCard::from(&show)],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["shows"][0]["id"], 139);
        assert_eq!(value["shows"][0]["imageAlt"], "Poster for Girls");
        assert_eq!(value["shows"][0]["hasEpisodes"], true);
    }

    #[test]
    fn test_panel_open_payload_lines() {
        let episode =
            EpisodeRecord::from_raw(&json!({ "name": null, "season": 1, "number": 1 })).unwrap();
        let payload = PanelOpenPayload::new(139, &[episode]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "showId": 139, "lines": ["Season 1, Episode 1: No Name"] })
        );
    }

    #[test]
    fn test_panel_close_payload() {
        let value = serde_json::to_value(PanelClosePayload { show_id: 7 }).unwrap();
        assert_eq!(value, json!({ "showId": 7 }));
    }
}
