use scoreboard_api::TickerItem;
use serde_json::{Map, Value};

/// Hard cap on the favorites list.
pub const MAX_FAVORITES: usize = 50;

/// Resolve the favorites list from the merged today+finals candidates.
///
/// For each (league, team) pair the first matching candidate wins; a team
/// with no match contributes a placeholder line instead. Output order
/// follows the favoritesTeams object order, then each team list in order.
pub fn resolve_favorites(
    candidates: &[TickerItem],
    favorites_teams: &Map<String, Value>,
) -> Vec<TickerItem> {
    let mut favorites = Vec::new();

    for (league, teams) in favorites_teams {
        let teams = teams.as_array().map(Vec::as_slice).unwrap_or_default();
        for team in teams.iter().filter_map(Value::as_str) {
            let hit = candidates
                .iter()
                .find(|item| item.league == *league && contains_team(&item.text, team));
            favorites.push(match hit {
                Some(item) => item.clone(),
                None => TickerItem {
                    league: league.clone(),
                    text: format!("{team} — no game/result today"),
                },
            });
        }
    }

    favorites.truncate(MAX_FAVORITES);
    favorites
}

/// Case-insensitive containment, bounded on both sides by a space or the
/// string edge. Not a tokenizer: "Cowboys" matches "Eagles @ Cowboys 7:15
/// PM ET" but not "Cowboysville"; multi-word names must appear contiguously.
fn contains_team(text: &str, team: &str) -> bool {
    if team.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    let team = team.to_lowercase();

    let mut from = 0;
    while let Some(pos) = text[from..].find(&team) {
        let start = from + pos;
        let end = start + team.len();
        let left_ok = start == 0 || text.as_bytes()[start - 1] == b' ';
        let right_ok = end == text.len() || text.as_bytes()[end] == b' ';
        if left_ok && right_ok {
            return true;
        }
        from = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(league: &str, text: &str) -> TickerItem {
        TickerItem {
            league: league.to_owned(),
            text: text.to_owned(),
        }
    }

    fn teams(spec: Value) -> Map<String, Value> {
        spec.as_object().unwrap().clone()
    }

    #[test]
    fn matching_candidate_is_returned_as_is() {
        let candidates = [item("NFL", "Eagles @ Cowboys 7:15 PM ET")];
        let favs = resolve_favorites(&candidates, &teams(json!({"NFL": ["Cowboys"]})));
        assert_eq!(favs, vec![item("NFL", "Eagles @ Cowboys 7:15 PM ET")]);
    }

    #[test]
    fn missing_team_yields_a_placeholder() {
        let favs = resolve_favorites(&[], &teams(json!({"NFL": ["Cowboys"]})));
        assert_eq!(favs, vec![item("NFL", "Cowboys — no game/result today")]);
    }

    #[test]
    fn league_must_match_not_just_text() {
        let candidates = [item("NCAA", "Cowboys @ Sooners 3:30 PM ET")];
        let favs = resolve_favorites(&candidates, &teams(json!({"NFL": ["Cowboys"]})));
        assert_eq!(favs[0].text, "Cowboys — no game/result today");
    }

    #[test]
    fn match_is_case_insensitive() {
        let candidates = [item("NFL", "FINAL: Eagles 24 — Cowboys 17")];
        let favs = resolve_favorites(&candidates, &teams(json!({"NFL": ["cowboys"]})));
        assert_eq!(favs[0].text, "FINAL: Eagles 24 — Cowboys 17");
    }

    #[test]
    fn substring_of_a_longer_word_does_not_match() {
        let candidates = [item("NFL", "Cowboysville @ Somewhere 1:00 PM ET")];
        let favs = resolve_favorites(&candidates, &teams(json!({"NFL": ["Cowboys"]})));
        assert_eq!(favs[0].text, "Cowboys — no game/result today");
    }

    #[test]
    fn multi_word_names_match_contiguously() {
        let candidates = [
            item("NFL", "Green Bay @ Chicago 1:00 PM ET"),
            item("NFL", "Bay Green @ Detroit 1:00 PM ET"),
        ];
        let favs = resolve_favorites(&candidates, &teams(json!({"NFL": ["Green Bay"]})));
        assert_eq!(favs[0].text, "Green Bay @ Chicago 1:00 PM ET");
    }

    #[test]
    fn team_at_either_edge_of_the_text_matches() {
        let candidates = [item("NHL", "Rangers 3 — Devils 2")];
        let favs = resolve_favorites(&candidates, &teams(json!({"NHL": ["Rangers"]})));
        assert_eq!(favs[0].text, "Rangers 3 — Devils 2");
    }

    #[test]
    fn output_follows_mapping_then_team_list_order() {
        let candidates = [item("MLB", "Cubs @ Cardinals 2:20 PM ET")];
        let favs = resolve_favorites(
            &candidates,
            &teams(json!({"NFL": ["Cowboys", "Eagles"], "MLB": ["Cubs"]})),
        );
        let texts: Vec<&str> = favs.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "Cowboys — no game/result today",
                "Eagles — no game/result today",
                "Cubs @ Cardinals 2:20 PM ET",
            ]
        );
    }

    #[test]
    fn output_is_capped() {
        let names: Vec<String> = (0..MAX_FAVORITES + 10).map(|i| format!("Team{i}")).collect();
        let favs = resolve_favorites(&[], &teams(json!({ "NFL": names })));
        assert_eq!(favs.len(), MAX_FAVORITES);
    }
}
