//! Field Validation
//!
//! Converts raw wire field values into a validated [`NewLand`], accumulating
//! per-field violation messages. Validation always inspects every field so a
//! single response can report the full set of problems.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::entities::NewLand;
use crate::domain::value_objects::Price;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for the name field (in characters)
pub const NAME_MAX_LENGTH: usize = 255;

/// Maximum length for the location field (in characters)
pub const LOCATION_MAX_LENGTH: usize = 255;

/// Maximum length for the land_category field (in characters)
pub const LAND_CATEGORY_MAX_LENGTH: usize = 100;

/// Maximum length for the tehsil_name field (in characters)
pub const TEHSIL_NAME_MAX_LENGTH: usize = 100;

/// Maximum length for the district_name field (in characters)
pub const DISTRICT_NAME_MAX_LENGTH: usize = 100;

/// Maximum length for the state field (in characters)
pub const STATE_MAX_LENGTH: usize = 100;

// ============================================================================
// FieldErrors
// ============================================================================

/// Per-field validation messages, keyed by wire field name
///
/// Serializes as `{"field": ["message", ...], ...}` - exactly the body of a
/// 400 response from the create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation message against a field
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    /// Number of fields with at least one violation
    pub fn field_count(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

// ============================================================================
// LandForm
// ============================================================================

/// Raw candidate field values as decoded from the wire
///
/// Every field is optional at this stage; `validate` decides what absence
/// means per field. The image part is handled separately because it only
/// becomes a stored path after the upload is written.
#[derive(Debug, Clone, Default)]
pub struct LandForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub price: Option<String>,
    pub available: Option<String>,
    pub land_category: Option<String>,
    pub tehsil_name: Option<String>,
    pub district_name: Option<String>,
    pub state: Option<String>,
}

impl LandForm {
    /// Assign a raw value to the named field
    ///
    /// Returns false when the name matches no known field, so callers can
    /// drain and ignore unknown wire parts. A repeated name overwrites the
    /// earlier value (last wins).
    pub fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = Some(value),
            "location" => self.location = Some(value),
            "area" => self.area = Some(value),
            "price" => self.price = Some(value),
            "available" => self.available = Some(value),
            "land_category" => self.land_category = Some(value),
            "tehsil_name" => self.tehsil_name = Some(value),
            "district_name" => self.district_name = Some(value),
            "state" => self.state = Some(value),
            _ => return false,
        }
        true
    }

    /// Validate every field and build a record ready for storage
    ///
    /// On failure returns the accumulated per-field messages; no field stops
    /// the inspection of the others.
    pub fn validate(self) -> Result<NewLand, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = require_text(&mut errors, "name", self.name, NAME_MAX_LENGTH);
        let location = require_text(&mut errors, "location", self.location, LOCATION_MAX_LENGTH);
        let area = require_area(&mut errors, "area", self.area);
        let price = require_price(&mut errors, "price", self.price);
        let available = parse_available(&mut errors, "available", self.available);
        let land_category = require_text(
            &mut errors,
            "land_category",
            self.land_category,
            LAND_CATEGORY_MAX_LENGTH,
        );
        let tehsil_name = require_text(
            &mut errors,
            "tehsil_name",
            self.tehsil_name,
            TEHSIL_NAME_MAX_LENGTH,
        );
        let district_name = require_text(
            &mut errors,
            "district_name",
            self.district_name,
            DISTRICT_NAME_MAX_LENGTH,
        );
        let state = require_text(&mut errors, "state", self.state, STATE_MAX_LENGTH);

        if let (
            Some(name),
            Some(location),
            Some(area),
            Some(price),
            Some(available),
            Some(land_category),
            Some(tehsil_name),
            Some(district_name),
            Some(state),
        ) = (
            name,
            location,
            area,
            price,
            available,
            land_category,
            tehsil_name,
            district_name,
            state,
        ) {
            Ok(NewLand {
                name,
                location,
                area,
                price,
                image: None,
                available,
                land_category,
                tehsil_name,
                district_name,
                state,
            })
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Field validators
// ============================================================================

/// Required, non-blank, length-bounded text field (input is trimmed)
fn require_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    max_chars: usize,
) -> Option<String> {
    let Some(raw) = value else {
        errors.push(field, "This field is required.");
        return None;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "This field may not be blank.");
        return None;
    }

    if trimmed.chars().count() > max_chars {
        errors.push(
            field,
            format!("Ensure this field has no more than {max_chars} characters."),
        );
        return None;
    }

    Some(trimmed.to_string())
}

/// Required finite floating-point field
fn require_area(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<f64> {
    let Some(raw) = value else {
        errors.push(field, "This field is required.");
        return None;
    };

    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            errors.push(field, "A valid number is required.");
            None
        }
    }
}

/// Required decimal field bounded to the price precision
fn require_price(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<Price> {
    let Some(raw) = value else {
        errors.push(field, "This field is required.");
        return None;
    };

    match Price::parse(&raw) {
        Ok(price) => Some(price),
        Err(err) => {
            errors.push(field, err.to_string());
            None
        }
    }
}

/// Optional boolean field; absence means the model default (true)
fn parse_available(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
) -> Option<bool> {
    let Some(raw) = value else {
        return Some(true);
    };

    match parse_bool(&raw) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(field, "Must be a valid boolean.");
            None
        }
    }
}

/// Accepts the spellings HTML forms and JSON clients actually send
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> LandForm {
        LandForm {
            name: Some("Plot A".to_string()),
            location: Some("X".to_string()),
            area: Some("500.0".to_string()),
            price: Some("10000.00".to_string()),
            available: Some("true".to_string()),
            land_category: Some("Agricultural".to_string()),
            tehsil_name: Some("T1".to_string()),
            district_name: Some("D1".to_string()),
            state: Some("S1".to_string()),
        }
    }

    mod field_errors {
        use super::*;

        #[test]
        fn test_push_and_get() {
            let mut errors = FieldErrors::new();
            errors.push("name", "This field is required.");
            errors.push("name", "Another problem.");
            assert_eq!(errors.get("name").unwrap().len(), 2);
            assert_eq!(errors.field_count(), 1);
            assert!(!errors.is_empty());
        }

        #[test]
        fn test_serializes_as_field_map() {
            let mut errors = FieldErrors::new();
            errors.push("price", "A valid number is required.");
            let json = serde_json::to_value(&errors).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"price": ["A valid number is required."]})
            );
        }

        #[test]
        fn test_display_joins_fields() {
            let mut errors = FieldErrors::new();
            errors.push("name", "This field is required.");
            errors.push("state", "This field is required.");
            let rendered = errors.to_string();
            assert!(rendered.contains("name:"));
            assert!(rendered.contains("state:"));
        }
    }

    mod form_assignment {
        use super::*;

        #[test]
        fn test_set_known_fields() {
            let mut form = LandForm::default();
            assert!(form.set("name", "Plot A".to_string()));
            assert!(form.set("tehsil_name", "T1".to_string()));
            assert_eq!(form.name.as_deref(), Some("Plot A"));
            assert_eq!(form.tehsil_name.as_deref(), Some("T1"));
        }

        #[test]
        fn test_set_unknown_field() {
            let mut form = LandForm::default();
            assert!(!form.set("owner", "nobody".to_string()));
        }

        #[test]
        fn test_repeated_set_last_wins() {
            let mut form = LandForm::default();
            form.set("name", "First".to_string());
            form.set("name", "Second".to_string());
            assert_eq!(form.name.as_deref(), Some("Second"));
        }
    }

    mod validate_success {
        use super::*;

        #[test]
        fn test_complete_form() {
            let land = complete_form().validate().unwrap();
            assert_eq!(land.name, "Plot A");
            assert_eq!(land.area, 500.0);
            assert_eq!(land.price.to_string(), "10000.00");
            assert!(land.available);
            assert!(land.image.is_none());
        }

        #[test]
        fn test_text_fields_are_trimmed() {
            let mut form = complete_form();
            form.name = Some("  Plot A  ".to_string());
            let land = form.validate().unwrap();
            assert_eq!(land.name, "Plot A");
        }

        #[test]
        fn test_available_defaults_to_true() {
            let mut form = complete_form();
            form.available = None;
            let land = form.validate().unwrap();
            assert!(land.available);
        }

        #[test]
        fn test_available_spellings() {
            for (raw, expected) in [
                ("true", true),
                ("TRUE", true),
                ("1", true),
                ("yes", true),
                ("on", true),
                ("false", false),
                ("0", false),
                ("no", false),
                ("off", false),
            ] {
                let mut form = complete_form();
                form.available = Some(raw.to_string());
                let land = form.validate().unwrap();
                assert_eq!(land.available, expected, "raw: {raw}");
            }
        }
    }

    mod validate_failure {
        use super::*;

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let errors = LandForm::default().validate().unwrap_err();
            for field in [
                "name",
                "location",
                "area",
                "price",
                "land_category",
                "tehsil_name",
                "district_name",
                "state",
            ] {
                assert_eq!(
                    errors.get(field).unwrap(),
                    &vec!["This field is required.".to_string()],
                    "field: {field}"
                );
            }
            // available has a default, so it is never required
            assert!(errors.get("available").is_none());
        }

        #[test]
        fn test_blank_field() {
            let mut form = complete_form();
            form.location = Some("   ".to_string());
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get("location").unwrap(),
                &vec!["This field may not be blank.".to_string()]
            );
        }

        #[test]
        fn test_overlong_name() {
            let mut form = complete_form();
            form.name = Some("x".repeat(NAME_MAX_LENGTH + 1));
            let errors = form.validate().unwrap_err();
            assert!(errors.get("name").unwrap()[0].contains("no more than 255 characters"));
        }

        #[test]
        fn test_overlong_category() {
            let mut form = complete_form();
            form.land_category = Some("x".repeat(LAND_CATEGORY_MAX_LENGTH + 1));
            let errors = form.validate().unwrap_err();
            assert!(
                errors.get("land_category").unwrap()[0].contains("no more than 100 characters")
            );
        }

        #[test]
        fn test_unparseable_area() {
            let mut form = complete_form();
            form.area = Some("five hundred".to_string());
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get("area").unwrap(),
                &vec!["A valid number is required.".to_string()]
            );
        }

        #[test]
        fn test_non_finite_area() {
            for raw in ["NaN", "inf", "-inf"] {
                let mut form = complete_form();
                form.area = Some(raw.to_string());
                let errors = form.validate().unwrap_err();
                assert!(errors.get("area").is_some(), "raw: {raw}");
            }
        }

        #[test]
        fn test_price_precision_violations() {
            let mut form = complete_form();
            form.price = Some("10.005".to_string());
            let errors = form.validate().unwrap_err();
            assert!(errors.get("price").unwrap()[0].contains("decimal places"));

            let mut form = complete_form();
            form.price = Some("12345678901".to_string());
            let errors = form.validate().unwrap_err();
            assert!(errors.get("price").unwrap()[0].contains("before the decimal point"));
        }

        #[test]
        fn test_invalid_available() {
            let mut form = complete_form();
            form.available = Some("perhaps".to_string());
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get("available").unwrap(),
                &vec!["Must be a valid boolean.".to_string()]
            );
        }

        #[test]
        fn test_failures_accumulate_across_fields() {
            let mut form = complete_form();
            form.name = None;
            form.price = Some("not-a-price".to_string());
            form.state = Some("".to_string());
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.field_count(), 3);
        }
    }
}
