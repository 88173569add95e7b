use std::fs;
use std::path::PathBuf;

use headline_scout::lookup::PlayerLookup;
use headline_scout::roster::parse_players_by_team;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn roster_parse_skips_malformed_entries() {
    let players = parse_players_by_team(&read_fixture("players_by_team.json"))
        .expect("fixture should parse");
    // Two Newcastle entries are malformed (missing name, numeric name).
    assert_eq!(players.len(), 8);
    assert!(players.iter().all(|p| !p.name.trim().is_empty()));

    let odegaard = players
        .iter()
        .find(|p| p.name == "Martin Ødegaard")
        .expect("Ødegaard should be present");
    assert_eq!(odegaard.forename, "Martin");
    assert_eq!(odegaard.surname, "Ødegaard");
    assert_eq!(odegaard.team, "Arsenal");

    // No space in the display name means an empty surname.
    let ronaldinho = players
        .iter()
        .find(|p| p.name == "Ronaldinho")
        .expect("Ronaldinho should be present");
    assert_eq!(ronaldinho.forename, "Ronaldinho");
    assert!(ronaldinho.surname.is_empty());
}

#[test]
fn roster_parse_rejects_structural_failures() {
    assert!(parse_players_by_team("not json at all").is_err());
    assert!(parse_players_by_team("[1, 2, 3]").is_err());
    assert!(parse_players_by_team("null").is_err());
}

#[test]
fn stats_reflect_index_contents() {
    let lookup = PlayerLookup::new();

    let before = lookup.stats();
    assert!(!before.is_loaded);
    assert_eq!(before.unique_surname_keys, 0);
    assert_eq!(before.total_indexed_players, 0);

    lookup
        .initialize_from_json(&read_fixture("players_by_team.json"))
        .expect("fixture roster should load");

    let after = lookup.stats();
    assert!(after.is_loaded);
    // Raw keys: ødegaard, lewis-skelly, saka, smith, lewis, ham; plus the
    // normalized variant "odegaard". Ronaldinho has no surname to index.
    assert_eq!(after.unique_surname_keys, 7);
    // Ødegaard is stored under both of his keys; the smiths share one entry.
    assert_eq!(after.total_indexed_players, 8);
}

#[test]
fn matcher_degrades_before_initialization() {
    let lookup = PlayerLookup::new();
    assert!(lookup.check_headline("Saka stars again").is_empty());
}

#[test]
fn initialize_is_idempotent_after_success() {
    let lookup = PlayerLookup::new();
    lookup
        .initialize_from_json(&read_fixture("players_by_team.json"))
        .expect("first load should succeed");
    let first = lookup.stats();

    // A second initialize is a no-op, even with a different roster.
    lookup
        .initialize_from_json(r#"{"Chelsea": [{"name": "Cole Palmer", "position": "Midfielder", "league": "Premier League"}]}"#)
        .expect("second initialize should be accepted");
    assert_eq!(lookup.stats(), first);
    assert!(lookup.check_headline("Palmer scores").is_empty());
}

#[test]
fn failed_load_is_sticky_and_degrades() {
    let lookup = PlayerLookup::new();
    assert!(lookup.initialize_from_json("{{{").is_err());
    assert!(!lookup.is_loaded());
    assert!(lookup.check_headline("Saka stars again").is_empty());

    // No automatic retry: a later valid roster is still refused.
    let err = lookup
        .initialize_from_json(&read_fixture("players_by_team.json"))
        .expect_err("failed state should be sticky");
    assert!(err.to_string().contains("previously failed"));
    assert!(!lookup.is_loaded());
}
