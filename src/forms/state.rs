//! Generic form state: values, per-field errors and a submitting flag

use std::future::Future;

use indexmap::IndexMap;

use crate::error::{AppError, AppResult};

/// Field name → error message, in the order the rules produced them
pub type FieldErrors = IndexMap<String, String>;

/// Validation function run against the current values
pub type Validator<V> = Box<dyn Fn(&V) -> FieldErrors + Send + Sync>;

/// Values of a form, settable field by field from raw input
pub trait FormValues: Clone {
    /// Set one field from its raw string input; unknown fields are rejected.
    fn set_field(&mut self, field: &str, value: String) -> AppResult<()>;
}

/// Free-form values, any field name accepted
impl FormValues for IndexMap<String, String> {
    fn set_field(&mut self, field: &str, value: String) -> AppResult<()> {
        self.insert(field.to_string(), value);
        Ok(())
    }
}

/// Outcome of [`FormState::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    /// Validation failed; the callback was not invoked
    Invalid(FieldErrors),
    Submitted(T),
}

impl<T> Submission<T> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Submission::Submitted(_))
    }
}

pub struct FormState<V: FormValues> {
    initial: V,
    values: V,
    errors: FieldErrors,
    submitting: bool,
    validator: Option<Validator<V>>,
}

impl<V: FormValues> FormState<V> {
    pub fn new(initial: V) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            submitting: false,
            validator: None,
        }
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&V) -> FieldErrors + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|e| e.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update one field and clear that field's error (and only that one)
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        self.values.set_field(field, value.into())?;
        self.errors.shift_remove(field);
        Ok(())
    }

    /// Merge several fields at once; errors are left as they are
    pub fn set_values<I, K, S>(&mut self, partial: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<String>,
    {
        for (field, value) in partial {
            self.values.set_field(field.as_ref(), value.into())?;
        }
        Ok(())
    }

    /// Run the validator, if any, and store its errors. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        match self.validator {
            Some(ref validator) => {
                self.errors = validator(&self.values);
                self.errors.is_empty()
            }
            None => true,
        }
    }

    /// Validate and, when valid, raise the submitting flag and return a copy of the values.
    ///
    /// For views that send the request themselves; pair with [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<V, FieldErrors> {
        if !self.validate() {
            return Err(self.errors.clone());
        }
        self.submitting = true;
        Ok(self.values.clone())
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Validate, then hand a copy of the values to `on_submit`.
    ///
    /// On validation failure the callback is not called and the submitting flag is not
    /// raised. Otherwise the flag is raised for the duration of the callback and lowered
    /// when it completes or when this future is dropped; a callback error is returned
    /// to the caller after that.
    pub async fn submit<F, Fut, T>(&mut self, on_submit: F) -> AppResult<Submission<T>>
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let values = match self.begin_submit() {
            Ok(values) => values,
            Err(errors) => return Ok(Submission::Invalid(errors)),
        };

        let _guard = SubmittingGuard(&mut self.submitting);
        on_submit(values).await.map(Submission::Submitted)
    }

    /// Back to the initial values, with no errors and no pending submission
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.submitting = false;
    }

    /// Record an error coming from outside the validator (e.g. a server-side rejection)
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}

impl<V: FormValues> std::fmt::Debug for FormState<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// Lowers the submitting flag on drop, including when a submission is cancelled
struct SubmittingGuard<'a>(&'a mut bool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Error for a field name the form does not have
pub(crate) fn unknown_field(field: &str) -> AppError {
    AppError::Validation(format!("unknown form field: {}", field))
}
