//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use todohub_core::error::AppError;

/// Run `validator` checks on a request DTO, collapsing failures into a
/// single validation error.
pub(crate) fn check(dto: &impl Validate) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
