//! Platform-independent logic for the landing-page effect layer.
//!
//! Everything in this crate runs identically on native and wasm targets; the
//! web frontend consumes these types to drive the scramble-reveal animation,
//! the ambient particle backdrop and the product viewer. Nothing here touches
//! the DOM or the GPU.

pub mod constants;
pub mod mesh;
pub mod orbit;
pub mod particles;
pub mod reveal;
pub mod state;

pub use constants::*;
pub use mesh::*;
pub use orbit::*;
pub use particles::*;
pub use reveal::*;
pub use state::*;
