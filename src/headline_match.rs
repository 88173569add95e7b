use std::collections::HashSet;

use regex::Regex;

use crate::normalize::normalize;
use crate::roster::Player;
use crate::surname_index::SurnameIndex;

/// Find every player mentioned in a headline.
///
/// Two passes over the index:
/// 1. Full-name matches ("<forename> <surname>"), tried against the raw
///    headline and against both sides normalized. A hit blocks the player's
///    surname (and each hyphen/space-separated token of it) from pass 2, so
///    a "Lewis-Skelly" full-name hit can't let a bare "Lewis" surname fire
///    for a different player on the same headline.
/// 2. Surname-only matches on the remaining keys, against the raw headline.
///
/// All matching is whole-word and case-insensitive. Results are deduplicated
/// by name+team in discovery order. An empty headline matches nothing.
pub fn match_headline(index: &SurnameIndex, headline: &str) -> Vec<Player> {
    if headline.trim().is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<Player> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut blocked: HashSet<String> = HashSet::new();

    let headline_norm = normalize(headline);

    // Pass 1: full names take precedence over bare surnames.
    for (_, players) in index.iter() {
        for player in players {
            if player.forename.is_empty() {
                continue;
            }
            let full_name = format!("{} {}", player.forename, player.surname);
            let raw_hit = word_pattern(&full_name)
                .is_some_and(|re| re.is_match(headline));
            let norm_hit = word_pattern(&normalize(&full_name))
                .is_some_and(|re| re.is_match(&headline_norm));
            if !raw_hit && !norm_hit {
                continue;
            }
            if !seen.insert(player.identity_key()) {
                continue;
            }
            matched.push(player.clone());
            block_surname(&mut blocked, &player.surname);
        }
    }

    // Pass 2: surname-only, skipping keys claimed by a full-name match.
    for (key, players) in index.iter() {
        if blocked.contains(&key.to_lowercase()) || blocked.contains(&normalize(key)) {
            continue;
        }
        let Some(re) = word_pattern(key) else {
            continue;
        };
        if !re.is_match(headline) {
            continue;
        }
        for player in players {
            if seen.insert(player.identity_key()) {
                matched.push(player.clone());
            }
        }
    }

    matched
}

/// Mark a surname as consumed by a full-name match: the whole surname plus
/// every whitespace/hyphen-separated token, each in lower-cased and
/// normalized form.
fn block_surname(blocked: &mut HashSet<String>, surname: &str) {
    blocked.insert(surname.to_lowercase());
    blocked.insert(normalize(surname));
    for token in surname.split(|c: char| c.is_whitespace() || c == '-') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        blocked.insert(token.to_lowercase());
        blocked.insert(normalize(token));
    }
}

/// Whole-word, case-insensitive pattern for a literal name. Boundaries are
/// non-alphanumeric characters or string edges; metacharacters in the name
/// are escaped first.
fn word_pattern(term: &str) -> Option<Regex> {
    if term.trim().is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).ok()
}
