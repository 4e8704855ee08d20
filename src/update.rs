use crate::favorites::resolve_favorites;
use crate::state::TickerState;
use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use scoreboard_api::client::{ApiResult, ScoreboardApi, build_items, scoreboard_url};
use scoreboard_api::{League, Mode, TickerItem};

/// Hard cap on each persisted list.
const MAX_ITEMS: usize = 200;

pub const STATUS_LINE: &str = "NFL • NCAA FB • MLB • NHL — auto-updated (Today/Finals)";

/// One full update pass: fetch every league in sequence, then merge the
/// accumulated lists into the persisted state. A league that fails only
/// costs this run its own contribution.
pub async fn run_update(api: &ScoreboardApi, state: &mut TickerState, now: DateTime<Utc>) {
    run_leagues(api, state, now, |league| league.endpoint().to_owned()).await;
}

/// Same pass over an explicit endpoint table; tests point this at a local
/// mock server.
async fn run_leagues(
    api: &ScoreboardApi,
    state: &mut TickerState,
    now: DateTime<Utc>,
    endpoint: impl Fn(League) -> String,
) {
    let mut new_today = Vec::new();
    let mut new_finals = Vec::new();

    for league in League::ALL {
        match fetch_league(api, &endpoint(league), league, now).await {
            Ok((today, finals)) => {
                info!(
                    "{}: {} today, {} finals",
                    league.label(),
                    today.len(),
                    finals.len()
                );
                new_today.extend(today);
                new_finals.extend(finals);
            }
            Err(e) => warn!("{}: fetch failed, keeping previous items: {e}", league.label()),
        }
    }

    apply_fetched(state, new_today, new_finals);
}

/// Fetch and normalize both ticker slices for one league.
/// Today's slate comes from today's scoreboard, finals from yesterday's.
async fn fetch_league(
    api: &ScoreboardApi,
    base: &str,
    league: League,
    now: DateTime<Utc>,
) -> ApiResult<(Vec<TickerItem>, Vec<TickerItem>)> {
    let today = yyyymmdd(now);
    let yesterday = yyyymmdd(now - Duration::days(1));

    let events = api.fetch_events(&scoreboard_url(base, Some(&today))).await?;
    let mut today_items = build_items(&events, league, Mode::Today);
    if today_items.is_empty() {
        // The upstream date filter occasionally returns nothing; one
        // unfiltered fetch recovers the current slate. Finals are never
        // refetched — an empty finals list is a legitimate steady state.
        let events = api.fetch_events(&scoreboard_url(base, None)).await?;
        today_items = build_items(&events, league, Mode::Today);
    }

    let events = api
        .fetch_events(&scoreboard_url(base, Some(&yesterday)))
        .await?;
    let finals_items = build_items(&events, league, Mode::Finals);

    Ok((today_items, finals_items))
}

fn yyyymmdd(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%d").to_string()
}

/// Merge policy: `today` and `finals` are replaced wholesale, and only when
/// the fetch produced at least one item. A failed or off-season run never
/// blanks the ticker. Favorites and the status line refresh every run.
pub fn apply_fetched(
    state: &mut TickerState,
    new_today: Vec<TickerItem>,
    new_finals: Vec<TickerItem>,
) {
    if !new_today.is_empty() {
        state.today = new_today;
        state.today.truncate(MAX_ITEMS);
    }
    if !new_finals.is_empty() {
        state.finals = new_finals;
        state.finals.truncate(MAX_ITEMS);
    }

    let candidates: Vec<TickerItem> = state
        .today
        .iter()
        .chain(state.finals.iter())
        .cloned()
        .collect();
    state.favorites = resolve_favorites(&candidates, &state.favorites_teams);
    state.status_line = STATUS_LINE.to_owned();
}
