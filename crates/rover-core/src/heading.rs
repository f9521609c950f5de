//! Compass headings and the rotation state machine.
//!
//! The four cardinal headings form a cyclic group of order 4 under
//! rotation: N→E→S→W→N clockwise. Rotation is encoded as two total
//! match tables ([`Heading::turned_left`] and [`Heading::turned_right`])
//! so there is no default case to get wrong.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal compass directions a rover can face.
///
/// Serialized on the wire as the single letter `"N"`, `"E"`, `"S"`,
/// or `"W"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Facing north (increasing y).
    N,
    /// Facing east (increasing x).
    E,
    /// Facing south (decreasing y).
    S,
    /// Facing west (decreasing x).
    W,
}

impl Heading {
    /// All four headings in clockwise order, starting at north.
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    /// The heading after one quarter-turn counter-clockwise.
    pub fn turned_left(self) -> Heading {
        match self {
            Heading::N => Heading::W,
            Heading::W => Heading::S,
            Heading::S => Heading::E,
            Heading::E => Heading::N,
        }
    }

    /// The heading after one quarter-turn clockwise.
    pub fn turned_right(self) -> Heading {
        match self {
            Heading::N => Heading::E,
            Heading::E => Heading::S,
            Heading::S => Heading::W,
            Heading::W => Heading::N,
        }
    }

    /// The `(dx, dy)` offset of one forward step at this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::N => (0, 1),
            Heading::E => (1, 0),
            Heading::S => (0, -1),
            Heading::W => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Heading::N => "N",
            Heading::E => "E",
            Heading::S => "S",
            Heading::W => "W",
        };
        f.write_str(letter)
    }
}

/// Error returned when parsing a heading from a string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseHeadingError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseHeadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid heading '{}', expected one of N, E, S, W", self.input)
    }
}

impl std::error::Error for ParseHeadingError {}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::N),
            "E" => Ok(Heading::E),
            "S" => Ok(Heading::S),
            "W" => Ok(Heading::W),
            other => Err(ParseHeadingError {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::ALL.to_vec())
    }

    // ── Rotation tables ─────────────────────────────────────────

    #[test]
    fn left_table() {
        assert_eq!(Heading::N.turned_left(), Heading::W);
        assert_eq!(Heading::W.turned_left(), Heading::S);
        assert_eq!(Heading::S.turned_left(), Heading::E);
        assert_eq!(Heading::E.turned_left(), Heading::N);
    }

    #[test]
    fn right_table() {
        assert_eq!(Heading::N.turned_right(), Heading::E);
        assert_eq!(Heading::E.turned_right(), Heading::S);
        assert_eq!(Heading::S.turned_right(), Heading::W);
        assert_eq!(Heading::W.turned_right(), Heading::N);
    }

    proptest! {
        #[test]
        fn left_then_right_is_identity(h in arb_heading()) {
            prop_assert_eq!(h.turned_left().turned_right(), h);
        }

        #[test]
        fn right_then_left_is_identity(h in arb_heading()) {
            prop_assert_eq!(h.turned_right().turned_left(), h);
        }

        #[test]
        fn four_lefts_is_identity(h in arb_heading()) {
            let r = h.turned_left().turned_left().turned_left().turned_left();
            prop_assert_eq!(r, h);
        }

        #[test]
        fn four_rights_is_identity(h in arb_heading()) {
            let r = h.turned_right().turned_right().turned_right().turned_right();
            prop_assert_eq!(r, h);
        }
    }

    // ── Display / FromStr ───────────────────────────────────────

    #[test]
    fn display_single_letter() {
        assert_eq!(Heading::N.to_string(), "N");
        assert_eq!(Heading::W.to_string(), "W");
    }

    #[test]
    fn parse_accepts_letters() {
        assert_eq!("E".parse::<Heading>(), Ok(Heading::E));
        assert_eq!("S".parse::<Heading>(), Ok(Heading::S));
    }

    #[test]
    fn parse_rejects_other_input() {
        assert!("North".parse::<Heading>().is_err());
        assert!("n".parse::<Heading>().is_err());
        assert!("".parse::<Heading>().is_err());
    }

    #[test]
    fn serde_uses_single_letter() {
        let json = serde_json::to_string(&Heading::S).unwrap();
        assert_eq!(json, "\"S\"");
        let back: Heading = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(back, Heading::W);
    }
}
