//! Form state and validation

pub mod state;
pub mod validation;

pub use state::{FieldErrors, FormState, FormValues, Submission};
pub use validation::{is_condition, is_direction, validate_distribution_form, DistributionForm};

/// Form state for the "new distribution" form, wired to its validation rules
pub fn distribution_form() -> FormState<DistributionForm> {
    FormState::new(DistributionForm::default()).with_validator(validate_distribution_form)
}
