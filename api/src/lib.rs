pub mod client;
pub mod espn;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// The four leagues the ticker tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Nfl,
    Nhl,
    Mlb,
    Ncaa,
}

impl League {
    pub const ALL: [League; 4] = [League::Nfl, League::Nhl, League::Mlb, League::Ncaa];

    /// Label used in ticker items and in the persisted favoritesTeams keys.
    pub fn label(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nhl => "NHL",
            League::Mlb => "MLB",
            League::Ncaa => "NCAA",
        }
    }

    /// ESPN "site" scoreboard endpoint for the league.
    /// NCAA carries groups=80 (FBS) so the response covers more than the top 25.
    pub fn endpoint(&self) -> &'static str {
        match self {
            League::Nfl => "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard",
            League::Nhl => "https://site.api.espn.com/apis/site/v2/sports/hockey/nhl/scoreboard",
            League::Mlb => "https://site.api.espn.com/apis/site/v2/sports/baseball/mlb/scoreboard",
            League::Ncaa => {
                "https://site.api.espn.com/apis/site/v2/sports/football/college-football/scoreboard?groups=80"
            }
        }
    }
}

/// Which slice of the ticker a normalization pass is building.
///
/// `Today` keeps scheduled and in-progress games, `Finals` keeps only
/// completed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Today,
    Finals,
}

/// One line of ticker output. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerItem {
    pub league: String,
    pub text: String,
}
