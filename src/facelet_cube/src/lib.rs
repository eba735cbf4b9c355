//! A facelet level model of an N×N cube and its six outer face turns.
//!
//! The state is a flat sequence of 6·N² facelet identities. A turn relocates
//! facelets and never creates, drops or duplicates one, so every reachable
//! state is a permutation of the solved one, and four turns of the same face
//! return to where they started.

mod cube;
mod edges;
mod error;
mod face;
mod rotation;
mod state;

pub use cube::{ApplyMode, Cube};
pub use error::{CubeError, ErrorKind};
pub use face::{Face, Facelet, FaceletCoord, face_offset, facelet_index};
pub use rotation::{rotate, rotate_times};
pub use state::CubeState;
