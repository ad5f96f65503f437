pub mod display;
pub mod keyset;

pub use display::DisplayKey;
pub use keyset::{KeySetId, KeySetKey, ValidityWindow, DEFAULT_KEY_TYPE, DEFAULT_KEY_USE, MUTATION_ID_PREFIX};
