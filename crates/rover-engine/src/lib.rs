//! Navigation engine for batches of rovers on a bounded grid.
//!
//! The engine is a pipeline of three stateless stages:
//!
//! 1. [`validate`](crate::validate::validate) — checks a
//!    [`NavigateRequest`] against the rule set (bound positivity,
//!    instruction syntax, starting positions) and accumulates every
//!    broken rule into a violation list.
//! 2. [`navigate`](crate::navigate::navigate) — folds one instruction
//!    string over one rover, testing the position against the grid
//!    bounds after every character.
//! 3. [`handle`](crate::handler::handle) — orchestrates the two above
//!    for a whole request and assembles the ordered response, or
//!    surfaces the first failure. No partial results: the batch
//!    succeeds or the call fails.
//!
//! Every call owns its data; there is no state shared between calls,
//! so concurrent calls need no coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handler;
pub mod navigate;
pub mod request;
pub mod response;
pub mod validate;

pub use handler::handle;
pub use navigate::navigate;
pub use request::{NavigateRequest, RoverInstruction};
pub use response::{NavigateResponse, RoverReport};
pub use validate::validate;
