use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One player from the roster. Immutable once loaded; forename/surname are
/// derived by splitting `name` at the first space (no space means an empty
/// surname, which makes the player unsearchable but still counted as loaded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub forename: String,
    pub surname: String,
    pub team: String,
    pub position: String,
    pub league: String,
}

impl Player {
    /// Identity key used for de-duplication across index entries.
    pub fn identity_key(&self) -> String {
        format!("{}-{}", self.name, self.team)
    }

    /// Display label used in aggregate mention counts.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.team)
    }
}

/// Split a display name into (forename, surname). First token is the
/// forename, everything after the first space is the surname.
pub fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.to_string(), String::new()),
    }
}

/// Decode a players-by-team JSON document into a flat roster.
///
/// Expected shape: `{ "<team>": [ { "name": ..., "position": ..., "league": ... }, ... ], ... }`.
/// Only a structural failure (invalid JSON, non-object top level) is an
/// error; malformed entries are dropped rather than failing the load.
/// Teams are flattened in name order, players in roster order within a team.
pub fn parse_players_by_team(raw: &str) -> Result<Vec<Player>> {
    let v: Value = serde_json::from_str(raw.trim()).context("invalid roster json")?;
    let teams = v
        .as_object()
        .context("roster json is not a team-to-players object")?;

    let mut out = Vec::new();
    for (team, players) in teams {
        let Some(entries) = players.as_array() else {
            continue;
        };
        for entry in entries {
            if let Some(p) = parse_roster_entry(team, entry) {
                out.push(p);
            }
        }
    }
    Ok(out)
}

fn parse_roster_entry(team: &str, v: &Value) -> Option<Player> {
    let name = v.get("name")?.as_str()?;
    if name.trim().is_empty() {
        return None;
    }
    let position = v
        .get("position")
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();
    let league = v
        .get("league")
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();

    let (forename, surname) = split_name(name);
    Some(Player {
        name: name.to_string(),
        forename,
        surname,
        team: team.to_string(),
        position,
        league,
    })
}
