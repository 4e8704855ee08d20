/// ESPN API raw wire types — serde shapes for deserializing scoreboard
/// responses. These map to ticker items via the normalization in client.rs.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub date: Option<String>, // ISO 8601, UTC
    pub status: Option<EspnStatus>,
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub state: Option<String>, // "pre" | "in" | "post"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoreboard_fields_deserialize_from_espn_names() {
        let body = r#"{
            "events": [{
                "name": "Philadelphia Eagles at Dallas Cowboys",
                "shortName": "PHI @ DAL",
                "competitions": [{
                    "date": "2026-01-10T00:15Z",
                    "status": {"type": {"state": "pre"}},
                    "competitors": [
                        {"homeAway": "home", "score": "0",
                         "team": {"displayName": "Dallas Cowboys", "shortDisplayName": "Cowboys"}},
                        {"homeAway": "away", "score": "0",
                         "team": {"displayName": "Philadelphia Eagles", "shortDisplayName": "Eagles"}}
                    ]
                }]
            }]
        }"#;
        let raw: ScoreboardResponse = serde_json::from_str(body).unwrap();
        let ev = &raw.events.unwrap()[0];
        assert_eq!(ev.short_name.as_deref(), Some("PHI @ DAL"));

        let comp = &ev.competitions.as_ref().unwrap()[0];
        let state = comp
            .status
            .as_ref()
            .and_then(|s| s.status_type.as_ref())
            .and_then(|t| t.state.as_deref());
        assert_eq!(state, Some("pre"));

        let home = &comp.competitors.as_ref().unwrap()[0];
        assert_eq!(home.home_away.as_deref(), Some("home"));
        assert_eq!(
            home.team.as_ref().unwrap().short_display_name.as_deref(),
            Some("Cowboys")
        );
    }

    #[test]
    fn partial_payloads_deserialize_with_fields_absent() {
        let raw: ScoreboardResponse = serde_json::from_str(r#"{"events":[{}]}"#).unwrap();
        let ev = &raw.events.unwrap()[0];
        assert!(ev.name.is_none());
        assert!(ev.competitions.is_none());
    }
}
