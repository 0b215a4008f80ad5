// Reusable library API — visible to both CLI and WASM builds
pub mod candidate;
pub mod errors;
mod finalize;
mod grid;
pub mod layout;
pub mod log;
mod numbering;
mod placement;
pub mod player;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use candidate::WordCandidate;
pub use layout::{generate_layout, Layout, Orientation, PlacedWord};
