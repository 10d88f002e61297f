//! Distribution form: raw input values and their validation rules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::state::{unknown_field, FieldErrors, FormValues};
use crate::{
    error::{AppError, AppResult},
    models::{Condition, CreateDistribution, Direction},
};

/// Whether `value` is one of the condition literals
pub fn is_condition(value: &str) -> bool {
    value.parse::<Condition>().is_ok()
}

/// Whether `value` is one of the direction literals
pub fn is_direction(value: &str) -> bool {
    value.parse::<Direction>().is_ok()
}

/// Raw input of the "new distribution" form, every field as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionForm {
    pub serial_number: String,
    pub direction: String,
    pub target_opd_id: String,
    pub target_location: String,
    /// `YYYY-MM-DD`; blank lets the server use today
    pub distribution_date: String,
    pub processed_by: String,
    pub condition_after: String,
    pub notes: String,
}

impl FormValues for DistributionForm {
    fn set_field(&mut self, field: &str, value: String) -> AppResult<()> {
        let slot = match field {
            "serial_number" => &mut self.serial_number,
            "direction" => &mut self.direction,
            "target_opd_id" => &mut self.target_opd_id,
            "target_location" => &mut self.target_location,
            "distribution_date" => &mut self.distribution_date,
            "processed_by" => &mut self.processed_by,
            "condition_after" => &mut self.condition_after,
            "notes" => &mut self.notes,
            other => return Err(unknown_field(other)),
        };
        *slot = value;
        Ok(())
    }
}

/// Check every rule and report all failures together.
///
/// The target OPD is only required once the direction is known to need one; a blank
/// direction reports its own error and nothing about the target.
pub fn validate_distribution_form(form: &DistributionForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.serial_number.trim().is_empty() {
        errors.insert("serial_number".into(), "Serial number is required".into());
    }

    let direction = form.direction.trim();
    let parsed_direction = if direction.is_empty() {
        errors.insert("direction".into(), "Direction is required".into());
        None
    } else {
        match direction.parse::<Direction>() {
            Ok(d) => Some(d),
            Err(_) => {
                errors.insert("direction".into(), "Direction is not valid".into());
                None
            }
        }
    };

    let target = form.target_opd_id.trim();
    if target.is_empty() {
        if parsed_direction.is_some_and(|d| d.requires_target_opd()) {
            errors.insert("target_opd_id".into(), "Target OPD is required".into());
        }
    } else if parse_id(target).is_none() {
        errors.insert("target_opd_id".into(), "Target OPD is not valid".into());
    }

    if form.processed_by.trim().is_empty() {
        errors.insert("processed_by".into(), "Processed by is required".into());
    }

    let condition = form.condition_after.trim();
    if !condition.is_empty() && !is_condition(condition) {
        errors.insert("condition_after".into(), "Condition is not valid".into());
    }

    let date = form.distribution_date.trim();
    if !date.is_empty() && parse_date(date).is_none() {
        errors.insert("distribution_date".into(), "Date must be YYYY-MM-DD".into());
    }

    errors
}

fn parse_id(value: &str) -> Option<i64> {
    value.parse::<i64>().ok().filter(|id| *id > 0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl DistributionForm {
    /// Convert validated input into the create request sent to the server
    pub fn to_request(&self) -> AppResult<CreateDistribution> {
        let errors = validate_distribution_form(self);
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.keys().map(|k| k.as_str()).collect();
            return Err(AppError::Validation(format!(
                "invalid fields: {}",
                fields.join(", ")
            )));
        }

        let direction = self.direction.trim().parse::<Direction>()?;
        let condition_after = match non_blank(&self.condition_after) {
            Some(c) => Some(c.parse::<Condition>()?),
            None => None,
        };

        Ok(CreateDistribution {
            serial_number: self.serial_number.trim().to_string(),
            direction,
            target_opd_id: parse_id(self.target_opd_id.trim()),
            target_location: non_blank(&self.target_location),
            distribution_date: parse_date(self.distribution_date.trim()),
            processed_by: self.processed_by.trim().to_string(),
            condition_after,
            notes: non_blank(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_reports_three_errors() {
        let errors = validate_distribution_form(&DistributionForm::default());
        let fields: Vec<&str> = errors.keys().map(|k| k.as_str()).collect();
        assert_eq!(fields, vec!["serial_number", "direction", "processed_by"]);
    }

    #[test]
    fn test_missing_target_for_gudang_to_opd() {
        let form = DistributionForm {
            serial_number: "SN1".to_string(),
            direction: "Gudang → OPD".to_string(),
            processed_by: "Budi".to_string(),
            ..Default::default()
        };
        let errors = validate_distribution_form(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("target_opd_id"));
    }

    #[test]
    fn test_opd_to_gudang_needs_no_target() {
        let form = DistributionForm {
            serial_number: "SN1".to_string(),
            direction: "OPD → Gudang".to_string(),
            processed_by: "Budi".to_string(),
            ..Default::default()
        };
        assert!(validate_distribution_form(&form).is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let form = DistributionForm {
            serial_number: "   ".to_string(),
            direction: "OPD → OPD".to_string(),
            target_opd_id: "4".to_string(),
            processed_by: "\t".to_string(),
            ..Default::default()
        };
        let errors = validate_distribution_form(&form);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("serial_number"));
        assert!(errors.contains_key("processed_by"));
    }

    #[test]
    fn test_unknown_direction_and_condition() {
        let form = DistributionForm {
            serial_number: "SN1".to_string(),
            direction: "Gudang -> OPD".to_string(),
            processed_by: "Budi".to_string(),
            condition_after: "Hilang".to_string(),
            ..Default::default()
        };
        let errors = validate_distribution_form(&form);
        assert_eq!(errors.get("direction").map(|s| s.as_str()), Some("Direction is not valid"));
        assert!(errors.contains_key("condition_after"));
        assert!(!errors.contains_key("target_opd_id"));
    }

    #[test]
    fn test_type_guards() {
        assert!(is_condition("Layak Pakai"));
        assert!(!is_condition("layak pakai"));
        assert!(is_direction("OPD → OPD"));
        assert!(!is_direction(""));
    }

    #[test]
    fn test_to_request() {
        let form = DistributionForm {
            serial_number: " SN1 ".to_string(),
            direction: "Gudang → OPD".to_string(),
            target_opd_id: "12".to_string(),
            distribution_date: "2024-06-30".to_string(),
            processed_by: "Budi".to_string(),
            condition_after: "Layak Pakai".to_string(),
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.serial_number, "SN1");
        assert_eq!(request.direction, Direction::GudangToOpd);
        assert_eq!(request.target_opd_id, Some(12));
        assert_eq!(request.distribution_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(request.condition_after, Some(Condition::LayakPakai));
        assert_eq!(request.target_location, None);

        assert!(DistributionForm::default().to_request().is_err());
    }

    #[test]
    fn test_set_field_rejects_unknown() {
        let mut form = DistributionForm::default();
        assert!(form.set_field("serial_number", "SN9".to_string()).is_ok());
        assert_eq!(form.serial_number, "SN9");
        assert!(form.set_field("colour", "red".to_string()).is_err());
    }
}
