//! Single-character movement and rotation instructions.

/// One rover command, decoded from a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `L` — rotate one quarter-turn counter-clockwise.
    Left,
    /// `R` — rotate one quarter-turn clockwise.
    Right,
    /// `M` — move forward one cell at the current heading.
    Move,
}

impl Instruction {
    /// Decode a single instruction character. Returns `None` for any
    /// character outside `{L, R, M}`.
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'M' => Some(Instruction::Move),
            _ => None,
        }
    }
}

/// Whether every character of `instructions` is a valid instruction.
///
/// Equivalent to matching `^([LRM])*$`: the empty string passes, any
/// character outside `{L, R, M}` (including whitespace) fails.
pub fn instructions_are_valid(instructions: &str) -> bool {
    instructions.chars().all(|c| Instruction::from_char(c).is_some())
}
