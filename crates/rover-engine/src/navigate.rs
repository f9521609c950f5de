//! The instruction interpreter: fold a command string over one rover.

use rover_core::{GridBounds, Instruction, NavigateError, Rover};

/// Interpret `instructions` over `start` within `bounds`.
///
/// An explicit fold: each character produces a fresh rover value —
/// rotations update the heading through the rotation tables, `M`
/// advances one cell at the current heading. After every character the
/// position is tested against the inclusive bounds; the first
/// out-of-bounds position aborts with [`NavigateError::OutOfBounds`]
/// and no further characters are processed. Positions are never
/// clamped or silently corrected.
///
/// An absent or empty instruction string is a legal "no movement"
/// request and returns `start` unchanged. An absent `start` is a
/// malformed internal call — validation never lets one through — and
/// yields [`NavigateError::Internal`], distinct from the domain
/// failure.
///
/// Characters outside `{L, R, M}` leave the rover unchanged; for
/// validated requests they never occur.
pub fn navigate(
    start: Option<Rover>,
    instructions: Option<&str>,
    bounds: GridBounds,
) -> Result<Rover, NavigateError> {
    let Some(start) = start else {
        return Err(NavigateError::Internal {
            reason: "wrong request".into(),
        });
    };

    let mut current = start;
    for c in instructions.unwrap_or("").chars() {
        current = match Instruction::from_char(c) {
            Some(Instruction::Move) => current.advanced(),
            Some(rotation) => current.turned(rotation),
            None => current,
        };
        if !bounds.contains(current.position) {
            return Err(NavigateError::OutOfBounds);
        }
    }
    Ok(current)
}
