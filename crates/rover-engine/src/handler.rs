//! The navigation handler: validate, interpret each rover, assemble
//! the ordered response.

use crate::navigate::navigate;
use crate::request::NavigateRequest;
use crate::response::{NavigateResponse, RoverReport};
use crate::validate::validate;
use rover_core::NavigateError;

/// Handle one batch navigation request end to end.
///
/// The pipeline, in order:
///
/// 1. An absent request fails with
///    [`NavigateError::MalformedRequest`] before validation runs — a
///    caller-contract breach, not a validation violation.
/// 2. The validator runs; any violations fail the call with the
///    aggregated [`NavigateError::Validation`] and no rover is
///    navigated.
/// 3. Each rover instruction is interpreted in input order against the
///    shared bounds. The first failure aborts the whole call — no
///    partial response survives, even for rovers that already
///    succeeded.
/// 4. On full success the response carries one report per input
///    instruction, in input order.
///
/// The `None` branches below step 2 are defensive: validation
/// guarantees a present, non-empty list with present elements, so they
/// surface as [`NavigateError::Internal`] rather than a domain error.
pub fn handle(request: Option<NavigateRequest>) -> Result<NavigateResponse, NavigateError> {
    let Some(request) = request else {
        return Err(NavigateError::MalformedRequest);
    };

    let violations = validate(&request);
    if !violations.is_empty() {
        return Err(NavigateError::Validation(violations));
    }

    let bounds = request.bounds();
    let Some(instructions) = request.rover_instructions else {
        return Err(NavigateError::Internal {
            reason: "wrong request".into(),
        });
    };

    let mut rovers = Vec::with_capacity(instructions.len());
    for entry in instructions {
        let Some(entry) = entry else {
            return Err(NavigateError::Internal {
                reason: "wrong request".into(),
            });
        };
        let rover = navigate(entry.rover, entry.instructions.as_deref(), bounds)?;
        rovers.push(RoverReport::from(rover));
    }

    Ok(NavigateResponse { rovers })
}
