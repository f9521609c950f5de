//! Request validation: every rule is evaluated, violations accumulate.
//!
//! Rules are plain composable functions, each returning the violations
//! it found; the parent concatenates them. A null list element or null
//! rover reports its own violation and skips the field-level checks
//! that would dereference it — everything else always runs, so one
//! call surfaces every broken rule at once rather than the first.

use crate::request::{NavigateRequest, RoverInstruction};
use rover_core::{instructions_are_valid, Rover, Violation};

/// Validate `request` against the full rule set.
///
/// Returns the accumulated violations in rule-declaration order; the
/// request is valid iff the returned vector is empty.
pub fn validate(request: &NavigateRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    if request.east_bound <= 0 {
        violations.push(Violation::new(
            "eastBound",
            "East bound must be greater than 0",
        ));
    }
    if request.north_bound <= 0 {
        violations.push(Violation::new(
            "northBound",
            "North bound must be greater than 0",
        ));
    }

    match &request.rover_instructions {
        None => violations.push(list_empty_violation()),
        Some(list) if list.is_empty() => violations.push(list_empty_violation()),
        Some(list) => {
            for (index, entry) in list.iter().enumerate() {
                if entry.is_none() {
                    violations.push(Violation::new(
                        format!("roverInstructions[{index}]"),
                        "Rover instructions can not be null",
                    ));
                }
            }
            for (index, entry) in list.iter().enumerate() {
                if let Some(instruction) = entry {
                    validate_rover_instruction(
                        instruction,
                        index,
                        request.east_bound,
                        request.north_bound,
                        &mut violations,
                    );
                }
            }
        }
    }

    violations
}

fn list_empty_violation() -> Violation {
    Violation::new(
        "roverInstructions",
        "List of rover instructions can not be empty",
    )
}

/// Field-level rules for one present list element.
fn validate_rover_instruction(
    instruction: &RoverInstruction,
    index: usize,
    east_bound: i32,
    north_bound: i32,
    violations: &mut Vec<Violation>,
) {
    if instruction.rover.is_none() {
        violations.push(Violation::new(
            format!("roverInstructions[{index}].rover"),
            "Rover can not be null",
        ));
    }

    // Absent and empty instruction strings both pass: absent means
    // "no movement", not a violation.
    if let Some(program) = &instruction.instructions {
        if !instructions_are_valid(program) {
            violations.push(Violation::new(
                format!("roverInstructions[{index}].instructions"),
                "Invalid instructions found",
            ));
        }
    }

    // Position rules come after the instruction rule in declaration
    // order; a null rover skips them but still reported above.
    if let Some(rover) = &instruction.rover {
        validate_rover_position(rover, index, east_bound, north_bound, violations);
    }
}

/// Starting-position rules: each coordinate inside the inclusive
/// region, with the bound value interpolated into the upper-edge
/// message.
fn validate_rover_position(
    rover: &Rover,
    index: usize,
    east_bound: i32,
    north_bound: i32,
    violations: &mut Vec<Violation>,
) {
    let field = |name: &str| format!("roverInstructions[{index}].rover.{name}");

    if rover.position.x > east_bound {
        violations.push(Violation::new(
            field("x"),
            format!("Position x can not be greater than {east_bound}"),
        ));
    }
    if rover.position.x < 0 {
        violations.push(Violation::new(
            field("x"),
            "Position x must be greater or equal than 0",
        ));
    }
    if rover.position.y > north_bound {
        violations.push(Violation::new(
            field("y"),
            format!("Position y can not be greater than {north_bound}"),
        ));
    }
    if rover.position.y < 0 {
        violations.push(Violation::new(
            field("y"),
            "Position y must be greater or equal than 0",
        ));
    }
}
