//! Wire-facing request types.
//!
//! The `Option` layers model wire-level absence exactly: a missing or
//! null `roverInstructions` list, a null list element, a null rover,
//! and a null instruction string are all representable, because each
//! has its own validation rule (or, for the instruction string, a
//! defined "no movement" meaning).

use rover_core::{GridBounds, Rover};
use serde::{Deserialize, Serialize};

/// One rover's starting state paired with its instruction string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverInstruction {
    /// The starting rover. Null or absent on the wire is a validation
    /// violation.
    #[serde(default)]
    pub rover: Option<Rover>,
    /// The instruction string. Absent means "no movement" and is
    /// legal, as is the empty string.
    #[serde(default)]
    pub instructions: Option<String>,
}

/// A batch navigation request: grid bounds plus an ordered list of
/// rover instructions. Input order determines output order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateRequest {
    /// Largest legal x coordinate; must be positive to validate.
    pub east_bound: i32,
    /// Largest legal y coordinate; must be positive to validate.
    pub north_bound: i32,
    /// The rovers to navigate, in order. Absent and empty are both a
    /// validation violation; null elements each get their own.
    #[serde(default)]
    pub rover_instructions: Option<Vec<Option<RoverInstruction>>>,
}

impl NavigateRequest {
    /// The grid bounds this request navigates within.
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.east_bound, self.north_bound)
    }
}
