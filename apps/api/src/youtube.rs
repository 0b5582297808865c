//! YouTube integration: video-id extraction from URLs, caption transcript
//! retrieval, and best-effort video details lookup via the Innertube player
//! endpoint.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

// The player endpoint rejects requests without a client identity. The
// ANDROID client returns caption tracks without needing cookies.
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "19.09.37";

// Accepted URL shapes: watch URLs, short youtu.be links, embeds, and the
// legacy /v/ form.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&?]+)",
        r"youtube\.com/embed/([^/?]+)",
        r"youtube\.com/v/([^/?]+)",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Extracts the video id from a YouTube URL. Returns `None` when the URL
/// matches none of the accepted shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("player API returned status {status}")]
    Api { status: u16 },

    #[error("no captions available for language '{language}'")]
    NoCaptions { language: String },
}

/// Video details attached to summarization responses. The lookup is
/// best-effort: when it fails the response degrades to a placeholder
/// instead of failing the whole request.
#[derive(Debug, Clone, Serialize)]
pub struct VideoDetails {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl VideoDetails {
    fn placeholder() -> Self {
        Self {
            title: "YouTube Video".to_string(),
            author: "Unknown".to_string(),
            length: None,
            views: None,
            publish_date: None,
            thumbnail_url: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    video_details: Option<PlayerVideoDetails>,
    captions: Option<PlayerCaptions>,
    microformat: Option<PlayerMicroformat>,
}

// Innertube returns numeric fields as strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerVideoDetails {
    title: Option<String>,
    author: Option<String>,
    length_seconds: Option<String>,
    view_count: Option<String>,
    thumbnail: Option<ThumbnailSet>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailSet {
    #[serde(default)]
    thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerCaptions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerMicroformat {
    player_microformat_renderer: Option<MicroformatRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MicroformatRenderer {
    publish_date: Option<String>,
}

// json3 caption payload: a flat list of timed events, each carrying text
// segments.
#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionSegment>,
}

#[derive(Debug, Deserialize)]
struct CaptionSegment {
    #[serde(default)]
    utf8: String,
}

/// Client for the public player endpoint and caption downloads.
#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    base_url: String,
}

impl YoutubeClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn player(&self, video_id: &str) -> Result<PlayerResponse, YoutubeError> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(YoutubeError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetches the caption transcript for a video and joins all caption
    /// segments with single spaces. `english` selects the `en` track; any
    /// other language value is used as the track's language code as given.
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<String, YoutubeError> {
        let code = caption_language_code(language);

        let player = self.player(video_id).await?;
        let tracks = player
            .captions
            .and_then(|captions| captions.player_captions_tracklist_renderer)
            .map(|renderer| renderer.caption_tracks)
            .unwrap_or_default();

        let track = tracks
            .into_iter()
            .find(|track| track.language_code == code)
            .ok_or_else(|| YoutubeError::NoCaptions {
                language: language.to_string(),
            })?;

        debug!("fetching '{code}' captions for video {video_id}");

        let response = self
            .client
            .get(format!("{}&fmt=json3", track.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(YoutubeError::Api {
                status: status.as_u16(),
            });
        }

        let payload: CaptionPayload = response.json().await?;

        let parts: Vec<String> = payload
            .events
            .into_iter()
            .map(|event| {
                event
                    .segs
                    .into_iter()
                    .map(|seg| seg.utf8)
                    .collect::<String>()
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        Ok(parts.join(" "))
    }

    /// Looks up title, author, and the other display fields for a video.
    /// Never fails: lookup errors are logged and replaced by a placeholder,
    /// since the details only decorate the response.
    pub async fn fetch_video_details(&self, video_id: &str) -> VideoDetails {
        let player = match self.player(video_id).await {
            Ok(player) => player,
            Err(e) => {
                warn!("details lookup for video {video_id} failed: {e}");
                return VideoDetails::placeholder();
            }
        };

        let publish_date = player
            .microformat
            .and_then(|microformat| microformat.player_microformat_renderer)
            .and_then(|renderer| renderer.publish_date);

        let Some(details) = player.video_details else {
            warn!("player response for video {video_id} carried no details");
            return VideoDetails::placeholder();
        };

        VideoDetails {
            title: details.title.unwrap_or_else(|| "YouTube Video".to_string()),
            author: details.author.unwrap_or_else(|| "Unknown".to_string()),
            length: details.length_seconds.and_then(|s| s.parse().ok()),
            views: details.view_count.and_then(|s| s.parse().ok()),
            publish_date,
            // The list is ordered smallest first; take the largest variant.
            thumbnail_url: details
                .thumbnail
                .and_then(|set| set.thumbnails.into_iter().last())
                .map(|thumbnail| thumbnail.url),
        }
    }
}

impl Default for YoutubeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The API accepts the human-readable `english` as a convenience; every
/// other value must already be a caption language code.
fn caption_language_code(language: &str) -> String {
    if language.eq_ignore_ascii_case("english") {
        "en".to_string()
    } else {
        language.to_string()
    }
}
