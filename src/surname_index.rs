use std::collections::BTreeMap;

use crate::normalize::normalize;
use crate::roster::Player;

/// Surname-keyed lookup over a roster.
///
/// Each player with a usable surname is stored under its raw lower-cased
/// surname and, when that differs, under the diacritic-normalized form as
/// well, so both "Ødegaard" and "Odegaard" resolve to the same players.
/// Built once per roster load and read-only afterwards. A BTreeMap keeps
/// iteration deterministic for a given roster, which keeps downstream
/// ranking ties stable.
#[derive(Debug, Clone, Default)]
pub struct SurnameIndex {
    entries: BTreeMap<String, Vec<Player>>,
}

impl SurnameIndex {
    /// Build the index from a flat roster. Infallible: players with an empty
    /// or whitespace-only surname are simply not indexed.
    pub fn build(players: &[Player]) -> Self {
        let mut entries: BTreeMap<String, Vec<Player>> = BTreeMap::new();

        for player in players {
            let raw_key = player.surname.trim().to_lowercase();
            if raw_key.is_empty() {
                continue;
            }
            entries.entry(raw_key.clone()).or_default().push(player.clone());

            let norm_key = normalize(&player.surname);
            if norm_key != raw_key {
                entries.entry(norm_key).or_default().push(player.clone());
            }
        }

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Player])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct surname keys, normalized variants included.
    pub fn unique_key_count(&self) -> usize {
        self.entries.len()
    }

    /// Total players across all entries. Players whose surname normalizes to
    /// a different key are counted once per key, matching what the entries
    /// actually hold.
    pub fn indexed_player_count(&self) -> usize {
        self.entries.values().map(|players| players.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
