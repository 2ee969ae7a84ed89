//! Reshaping of raw PokéAPI payloads into the facade's client format.
//!
//! - `format`: identifier → display name
//! - `profile`: flattened profile
//! - `moves`: move list grouped by version group
//! - `locations`: encounters grouped by game version, merged per location

pub mod format;
pub mod locations;
pub mod moves;
pub mod profile;

pub use format::title_case;
pub use locations::{group_locations_by_version, LocationsPayload};
pub use moves::{group_moves_by_version, MovesPayload};
pub use profile::Profile;
