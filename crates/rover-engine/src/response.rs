//! Wire-facing response types.

use rover_core::Rover;
use serde::{Deserialize, Serialize};

/// The final state of one rover, reported as its formatted
/// position-and-heading string, e.g. `"13 N"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoverReport {
    /// `"<x><y> <heading>"` with no separator between the coordinates.
    pub position_and_heading: String,
}

impl From<Rover> for RoverReport {
    fn from(rover: Rover) -> RoverReport {
        RoverReport {
            position_and_heading: rover.position_and_heading(),
        }
    }
}

/// A successful batch response: one report per input rover
/// instruction, in the same order. Never carries partial results — on
/// any failure the whole response is absent and an error is reported
/// instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateResponse {
    /// Final rover reports in input order.
    pub rovers: Vec<RoverReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::Heading;

    #[test]
    fn report_from_rover() {
        let report = RoverReport::from(Rover::new(3, 4, Heading::S));
        assert_eq!(report.position_and_heading, "34 S");
    }

    #[test]
    fn serializes_camel_case_field() {
        let resp = NavigateResponse {
            rovers: vec![RoverReport::from(Rover::new(1, 3, Heading::N))],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rovers": [{"positionAndHeading": "13 N"}]})
        );
    }
}
