//! Headline scanning for sports-player mentions.
//!
//! A roster of players is indexed by surname (case- and diacritic-
//! insensitive), headlines are matched against the index with full-name
//! precedence, and mention counts are aggregated across a growing article
//! collection. Fetching articles and rendering results are the caller's
//! concern; everything here works on plain data.

pub mod aggregate;
pub mod collection;
pub mod headline_match;
pub mod lookup;
pub mod normalize;
pub mod roster;
pub mod surname_index;
