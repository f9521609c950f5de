//! Rover: batch navigation of autonomous rovers on a bounded 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the `rover-core` and `rover-engine` sub-crates. For most
//! users, adding `rover` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//!
//! let request = NavigateRequest {
//!     east_bound: 5,
//!     north_bound: 5,
//!     rover_instructions: Some(vec![Some(RoverInstruction {
//!         rover: Some(Rover::new(1, 2, Heading::N)),
//!         instructions: Some("LMLMLMLMM".into()),
//!     })]),
//! };
//!
//! let response = handle(Some(request)).unwrap();
//! assert_eq!(response.rovers[0].position_and_heading, "13 N");
//! ```
//!
//! A request that would send a rover off the grid fails as a whole —
//! there are no partial results:
//!
//! ```rust
//! use rover::prelude::*;
//!
//! let request = NavigateRequest {
//!     east_bound: 5,
//!     north_bound: 5,
//!     rover_instructions: Some(vec![Some(RoverInstruction {
//!         rover: Some(Rover::new(1, 2, Heading::N)),
//!         instructions: Some("MMMM".into()),
//!     })]),
//! };
//!
//! let err = handle(Some(request)).unwrap_err();
//! assert_eq!(err.to_string(), "Mars Rover is out of bounds");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Domain value types and errors (`rover-core`).
pub use rover_core as types;

/// The navigation engine: validation, interpretation, handling
/// (`rover-engine`).
pub use rover_engine as engine;

/// The names most callers need.
pub mod prelude {
    pub use rover_core::{GridBounds, Heading, NavigateError, Position, Rover, Violation};
    pub use rover_engine::{
        handle, navigate, validate, NavigateRequest, NavigateResponse, RoverInstruction,
        RoverReport,
    };
}
