//! PokéAPI access
//!
//! - `client`: outbound HTTP client, one GET per call
//! - `models`: raw upstream JSON shapes

pub mod client;
pub mod models;

pub use client::PokeApiClient;
pub use models::{RawEncounterRecord, RawMoveRecord, RawPokemon};
