use crate::espn::{EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::{League, Mode, TickerItem};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// Crude ET approximation: UTC minus five hours, no DST adjustment.
const ET_OFFSET_SECS: i32 = 5 * 3600;

/// At most this many events are considered per scoreboard page.
pub const MAX_EVENTS: usize = 200;

/// Scoreboard client backed by ESPN's public "site" endpoints.
#[derive(Debug, Clone)]
pub struct ScoreboardApi {
    client: Client,
    timeout: Duration,
}

impl Default for ScoreboardApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("office-ticker/1.0 (scoreboard updater)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ScoreboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one scoreboard page and return its raw events.
    /// Normalization into ticker items is a separate, pure step.
    pub async fn fetch_events(&self, url: &str) -> ApiResult<Vec<EspnEvent>> {
        let raw: ScoreboardResponse = self.get(url).await?;
        Ok(raw.events.unwrap_or_default())
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

/// Build a scoreboard URL from a base endpoint, with an optional `dates`
/// filter (`YYYYMMDD` or `YYYYMMDD-YYYYMMDD`). Bases that already carry a
/// query string get `&` instead of `?`.
pub fn scoreboard_url(base: &str, dates: Option<&str>) -> String {
    match dates {
        Some(d) if base.contains('?') => format!("{base}&dates={d}"),
        Some(d) => format!("{base}?dates={d}"),
        None => base.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Normalization: ESPN wire events → ticker items
// ---------------------------------------------------------------------------

/// Normalize a scoreboard page into ticker lines for one league and mode.
pub fn build_items(events: &[EspnEvent], league: League, mode: Mode) -> Vec<TickerItem> {
    events
        .iter()
        .take(MAX_EVENTS)
        .filter_map(|ev| normalize_event(ev, league, mode))
        .collect()
}

/// Map one raw event to zero or one ticker line.
///
/// Events on the wrong side of the mode filter contribute nothing. Every
/// other edge case (missing scores, unparsable timestamp, missing team
/// names) resolves to a fallback value; this never fails.
pub fn normalize_event(event: &EspnEvent, league: League, mode: Mode) -> Option<TickerItem> {
    let comp = event.competitions.as_deref().unwrap_or_default().first();
    let state = comp
        .and_then(|c| c.status.as_ref())
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.state.as_deref())
        .unwrap_or("")
        .to_lowercase();

    match mode {
        Mode::Finals if state != "post" => return None,
        Mode::Today if state == "post" => return None,
        _ => {}
    }

    let competitors = comp
        .map(|c| c.competitors.as_deref().unwrap_or_default())
        .unwrap_or_default();

    let (home, away, home_score, away_score) = if competitors.len() >= 2 {
        // ESPN tags home/away; fall back to positional order when it doesn't.
        let home_c = competitors
            .iter()
            .find(|c| c.home_away.as_deref() == Some("home"))
            .unwrap_or(&competitors[0]);
        let away_c = competitors
            .iter()
            .find(|c| c.home_away.as_deref() == Some("away"))
            .unwrap_or(&competitors[1]);
        (
            team_name(home_c, "HOME"),
            team_name(away_c, "AWAY"),
            parse_score(home_c),
            parse_score(away_c),
        )
    } else {
        (String::new(), String::new(), None, None)
    };

    let time_part = comp
        .and_then(|c| c.date.as_deref())
        .map(display_time)
        .unwrap_or_default();

    let text = match (state.as_str(), away_score.zip(home_score)) {
        ("post", Some((a, h))) => format!("FINAL: {away} {a} — {home} {h}"),
        ("in", Some((a, h))) => format!("LIVE: {away} {a} — {home} {h}"),
        _ if !time_part.is_empty() && !away.is_empty() && !home.is_empty() => {
            format!("{away} @ {home} {time_part}")
        }
        _ => event
            .name
            .clone()
            .or_else(|| event.short_name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "(game)".to_owned()),
    };

    Some(TickerItem {
        league: league.label().to_owned(),
        text,
    })
}

fn team_name(c: &EspnCompetitor, fallback: &str) -> String {
    c.team
        .as_ref()
        .and_then(|t| {
            t.short_display_name
                .clone()
                .or_else(|| t.display_name.clone())
        })
        .unwrap_or_else(|| fallback.to_owned())
}

fn parse_score(c: &EspnCompetitor) -> Option<u32> {
    c.score.as_ref().and_then(|s| s.parse().ok())
}

/// `H:MM AM/PM ET` label for an ISO timestamp, without a leading zero on
/// the hour. Unparsable input yields an empty string.
fn display_time(iso: &str) -> String {
    let Some(utc) = parse_event_date(iso) else {
        return String::new();
    };
    let Some(offset) = FixedOffset::west_opt(ET_OFFSET_SECS) else {
        return String::new();
    };
    let et = utc.with_timezone(&offset);
    let (pm, hour) = et.hour12();
    let meridiem = if pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {meridiem} ET", et.minute())
}

fn parse_event_date(iso: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }
    // ESPN often omits seconds ("2026-01-10T00:15Z"), which RFC 3339 rejects.
    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|n| n.and_utc())
}
