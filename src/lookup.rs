use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;

use crate::headline_match::match_headline;
use crate::roster::{parse_players_by_team, Player};
use crate::surname_index::SurnameIndex;

/// Diagnostics snapshot for a lookup instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub is_loaded: bool,
    pub unique_surname_keys: usize,
    pub total_indexed_players: usize,
}

/// Owns the surname index and its load lifecycle: not loaded, ready, or
/// failed. Constructed by the caller (no global instance) so tests can run
/// independent rosters in one process.
///
/// The index is built off to the side and published through a `OnceCell`,
/// so no reader ever observes a partially built index and concurrent
/// initializers share a single outcome. Before the first successful
/// initialize, and after a failed one, matching degrades to empty results
/// instead of erroring.
#[derive(Debug, Default)]
pub struct PlayerLookup {
    index: OnceCell<SurnameIndex>,
    load_error: OnceCell<String>,
}

impl PlayerLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and publish the index from an already-decoded roster.
    /// Idempotent after the first success; a prior failure is sticky and is
    /// returned again rather than retried.
    pub fn initialize(&self, players: &[Player]) -> Result<()> {
        if self.index.get().is_none() {
            if let Some(err) = self.load_error.get() {
                return Err(anyhow!("roster load previously failed: {err}"));
            }
        }
        // get_or_init makes concurrent callers share one in-flight build.
        self.index.get_or_init(|| SurnameIndex::build(players));
        Ok(())
    }

    /// Decode a players-by-team JSON document and initialize from it. A
    /// structural decode failure leaves the lookup in the failed state.
    pub fn initialize_from_json(&self, raw: &str) -> Result<()> {
        if self.index.get().is_some() {
            return Ok(());
        }
        if let Some(err) = self.load_error.get() {
            return Err(anyhow!("roster load previously failed: {err}"));
        }
        match parse_players_by_team(raw) {
            Ok(players) => self.initialize(&players),
            Err(err) => {
                let _ = self.load_error.set(format!("{err:#}"));
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// Match a headline against the index. Empty result when the roster is
    /// not loaded or the headline is empty; never an error.
    pub fn check_headline(&self, headline: &str) -> Vec<Player> {
        match self.index.get() {
            Some(index) => match_headline(index, headline),
            None => Vec::new(),
        }
    }

    pub fn stats(&self) -> LookupStats {
        match self.index.get() {
            Some(index) => LookupStats {
                is_loaded: true,
                unique_surname_keys: index.unique_key_count(),
                total_indexed_players: index.indexed_player_count(),
            },
            None => LookupStats {
                is_loaded: false,
                unique_surname_keys: 0,
                total_indexed_players: 0,
            },
        }
    }
}
