//! Rover state: a grid position plus a heading.
//!
//! A rover is a plain value; [`Rover::advanced`] and [`Rover::turned`]
//! return new values instead of mutating, so folding an instruction
//! sequence over a rover never aliases state between steps.

use crate::heading::Heading;
use crate::instruction::Instruction;
use serde::{Deserialize, Serialize};

/// A grid position as east-west (`x`) and north-south (`y`) offsets.
///
/// The type itself carries no bounds; the legal region is supplied per
/// request as a [`GridBounds`](crate::bounds::GridBounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// East-west offset.
    pub x: i32,
    /// North-south offset.
    pub y: i32,
}

/// One rover: a [`Position`] plus a [`Heading`].
///
/// Wire shape is `{"x": 1, "y": 2, "heading": "N"}` — the position
/// fields are flattened alongside the heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    /// Where the rover is.
    #[serde(flatten)]
    pub position: Position,
    /// Which way it faces.
    pub heading: Heading,
}

impl Rover {
    /// Create a rover at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Heading) -> Rover {
        Rover {
            position: Position { x, y },
            heading,
        }
    }

    /// The rover one forward step ahead: exactly one coordinate changes
    /// by ±1 according to the heading, the heading itself is unchanged.
    /// No bounds checking happens here; that is the interpreter's job.
    /// Coordinates saturate at the numeric extremes rather than
    /// wrapping, so a step never panics or flips sign.
    pub fn advanced(self) -> Rover {
        let (dx, dy) = self.heading.offset();
        Rover {
            position: Position {
                x: self.position.x.saturating_add(dx),
                y: self.position.y.saturating_add(dy),
            },
            heading: self.heading,
        }
    }

    /// The rover after applying a rotation command. [`Instruction::Move`]
    /// leaves the heading unchanged; the caller dispatches movement to
    /// [`Rover::advanced`].
    pub fn turned(self, instruction: Instruction) -> Rover {
        let heading = match instruction {
            Instruction::Left => self.heading.turned_left(),
            Instruction::Right => self.heading.turned_right(),
            Instruction::Move => self.heading,
        };
        Rover {
            position: self.position,
            heading,
        }
    }

    /// The report string for this rover: `"<x><y> <heading>"` with no
    /// separator between the coordinates, e.g. `(1, 3, N)` → `"13 N"`.
    pub fn position_and_heading(&self) -> String {
        format!("{}{} {}", self.position.x, self.position.y, self.heading)
    }
}
