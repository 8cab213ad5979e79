//! Candidate-facing data models.

use serde::Deserialize;

use crate::errors::AppError;

/// Upper bound of the years-of-experience input.
pub const MAX_EXPERIENCE_YEARS: u8 = 50;

/// Candidate details submitted with a question-generation request.
///
/// Transient by design: re-sent with every request and never stored in the
/// session. Apart from the experience bound, no field is validated — any of
/// them may be empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub experience_years: u8,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tech_stack: String,
}

impl CandidateForm {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.experience_years > MAX_EXPERIENCE_YEARS {
            return Err(AppError::Validation(format!(
                "Years of experience must be between 0 and {MAX_EXPERIENCE_YEARS}"
            )));
        }
        Ok(())
    }
}
