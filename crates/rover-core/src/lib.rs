//! Core value types and errors for the rover navigation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the domain vocabulary shared across the workspace: compass headings,
//! grid positions, rover state, single-character instructions, grid
//! bounds, and the error taxonomy.
//!
//! Everything here is a plain value with no I/O and no interior
//! mutability. A [`Rover`] is fully described by its `(Position,
//! Heading)` pair; advancing or turning it produces a new value rather
//! than mutating in place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod heading;
pub mod instruction;
pub mod rover;

pub use bounds::GridBounds;
pub use error::{NavigateError, Violation};
pub use heading::Heading;
pub use instruction::{instructions_are_valid, Instruction};
pub use rover::{Position, Rover};
