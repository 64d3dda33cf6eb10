//! Scout images: the renderer seam and artifact naming.

use std::future::Future;

use crate::card::CardRecord;
use crate::error::{ScoutError, ScoutResult};

/// A rendered scout image ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutImage {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// File name to attach the image under.
    pub name: String,
}

/// Produces image bytes for scouted cards.
pub trait ImageRenderer {
    /// Fetch the full-size image at `url` for a single-card scout.
    fn render_card(&self, url: &str) -> impl Future<Output = ScoutResult<Vec<u8>>> + Send;

    /// Compose one image showing all `cards`.
    ///
    /// `layout_hint` is passed through to the renderer unchanged.
    fn render_composite(
        &self,
        cards: &[CardRecord],
        layout_hint: u32,
    ) -> impl Future<Output = ScoutResult<Vec<u8>>> + Send;
}

/// The full-size image URL of a card, unidolized preferred.
///
/// Protocol-relative URLs (`//host/path`) get `scheme` prepended.
pub fn solo_image_url(card: &CardRecord, scheme: &str) -> ScoutResult<String> {
    let raw = card
        .str_field("card_image")
        .or_else(|| card.str_field("card_idolized_image"))
        .ok_or(ScoutError::MissingImage)?;

    if raw.starts_with("//") {
        Ok(format!("{scheme}{raw}"))
    } else {
        Ok(raw.to_string())
    }
}

/// The last path segment of a URL, ignoring any query or fragment.
pub fn solo_file_name(url: &str) -> String {
    let without_scheme = url.split_once("//").map_or(url, |(_, rest)| rest);
    let location = without_scheme.split(['?', '#']).next().unwrap_or("");
    let path = location.split_once('/').map_or("", |(_, path)| path);
    path.rsplit('/').next().unwrap_or("").to_string()
}

/// File name for a composite scout image: `<unix timestamp><suffix>.png`.
pub fn composite_file_name(timestamp: i64, suffix: u32) -> String {
    format!("{timestamp}{suffix}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(value: serde_json::Value) -> CardRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn prefers_unidolized() {
        let c = card(json!({
            "card_image": "//i.schoolido.lu/c/1Honoka.png",
            "card_idolized_image": "//i.schoolido.lu/c/1idolizedHonoka.png"
        }));
        assert_eq!(
            solo_image_url(&c, "http:").unwrap(),
            "http://i.schoolido.lu/c/1Honoka.png"
        );
    }

    #[test]
    fn falls_back_to_idolized() {
        let c = card(json!({
            "card_image": null,
            "card_idolized_image": "//i.schoolido.lu/c/2idolizedUmi.png"
        }));
        assert_eq!(
            solo_image_url(&c, "https:").unwrap(),
            "https://i.schoolido.lu/c/2idolizedUmi.png"
        );
    }

    #[test]
    fn absolute_url_kept() {
        let c = card(json!({"card_image": "https://cdn.example/c/3.png"}));
        assert_eq!(
            solo_image_url(&c, "http:").unwrap(),
            "https://cdn.example/c/3.png"
        );
    }

    #[test]
    fn no_image_is_an_error() {
        let c = card(json!({"card_image": null, "card_idolized_image": null}));
        assert!(matches!(
            solo_image_url(&c, "http:"),
            Err(ScoutError::MissingImage)
        ));
    }

    #[test]
    fn file_name_from_url() {
        assert_eq!(
            solo_file_name("http://i.schoolido.lu/c/1Honoka.png"),
            "1Honoka.png"
        );
        assert_eq!(
            solo_file_name("http://host/a/b/card.png?size=large#top"),
            "card.png"
        );
        assert_eq!(solo_file_name("http://host"), "");
        assert_eq!(solo_file_name("http://host/dir/"), "");
    }

    #[test]
    fn query_before_path_has_no_file_name() {
        assert_eq!(solo_file_name("http://host?x=1/y.png"), "");
        assert_eq!(solo_file_name("http://host#frag/y.png"), "");
        assert_eq!(solo_file_name("//host/c/7.png?v=2"), "7.png");
    }

    #[test]
    fn composite_name() {
        assert_eq!(composite_file_name(1_700_000_000, 42), "170000000042.png");
        assert_eq!(composite_file_name(5, 0), "50.png");
    }
}
