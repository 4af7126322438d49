//! Domain Value Objects
//!
//! Immutable value types for the Land domain.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

// ============================================================================
// Price
// ============================================================================

/// Maximum total digits in a price (whole + decimal places)
pub const PRICE_MAX_DIGITS: u32 = 10;

/// Maximum digits after the decimal point
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Maximum digits before the decimal point
pub const PRICE_MAX_WHOLE_DIGITS: u32 = PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES;

/// Error returned when price validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Input is not a parseable decimal number
    Invalid,

    /// More than PRICE_DECIMAL_PLACES digits after the decimal point
    TooManyDecimalPlaces { places: u32 },

    /// More than PRICE_MAX_WHOLE_DIGITS digits before the decimal point
    TooManyWholeDigits { digits: u32 },
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "A valid number is required."),
            Self::TooManyDecimalPlaces { .. } => {
                write!(
                    f,
                    "Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."
                )
            }
            Self::TooManyWholeDigits { .. } => {
                write!(
                    f,
                    "Ensure that there are no more than {PRICE_MAX_WHOLE_DIGITS} digits before the decimal point."
                )
            }
        }
    }
}

impl std::error::Error for PriceError {}

/// Validated price - a decimal with at most 10 total digits, 2 after the point
///
/// # Invariants
/// - At most PRICE_DECIMAL_PLACES digits of scale
/// - At most PRICE_MAX_WHOLE_DIGITS digits before the decimal point
///
/// Stored as NUMERIC(10, 2); the wire representation is a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Parse and validate a price from raw text input
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let value = Decimal::from_str(input.trim()).map_err(|_| PriceError::Invalid)?;

        if value.scale() > PRICE_DECIMAL_PLACES {
            return Err(PriceError::TooManyDecimalPlaces {
                places: value.scale(),
            });
        }

        let whole_digits = Self::whole_digits(value);
        if whole_digits > PRICE_MAX_WHOLE_DIGITS {
            return Err(PriceError::TooManyWholeDigits {
                digits: whole_digits,
            });
        }

        // Normalize to the column scale; lossless because excess scale was
        // rejected above
        let mut value = value;
        value.rescale(PRICE_DECIMAL_PLACES);

        Ok(Self(value))
    }

    /// Create from a stored value (assumes the column constraint already held)
    pub fn from_stored(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Digits before the decimal point, sign and leading zeros excluded
    fn whole_digits(value: Decimal) -> u32 {
        let whole = value.abs().trunc();
        if whole.is_zero() {
            0
        } else {
            whole.normalize().mantissa().to_string().len() as u32
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// ============================================================================
// ImageUpload
// ============================================================================

/// An image file received from the wire, not yet written to storage
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name (untrusted; sanitized by the media store)
    pub filename: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    /// Validation messages for this upload, empty when acceptable
    pub fn problems(&self, max_bytes: usize) -> Vec<String> {
        let mut messages = Vec::new();
        if self.data.is_empty() {
            messages.push("The submitted file is empty.".to_string());
        } else if self.data.len() > max_bytes {
            messages.push(format!(
                "Ensure this file has no more than {} bytes (it has {}).",
                max_bytes,
                self.data.len()
            ));
        }
        messages
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod price_parsing {
        use super::*;

        #[test]
        fn test_plain_value() {
            let price = Price::parse("10000.00").unwrap();
            assert_eq!(price.to_string(), "10000.00");
        }

        #[test]
        fn test_integer_value_rescaled() {
            let price = Price::parse("500").unwrap();
            assert_eq!(price.as_decimal(), Decimal::from_str("500").unwrap());
            // Rendered at column scale, like the stored NUMERIC(10, 2)
            assert_eq!(price.to_string(), "500.00");
        }

        #[test]
        fn test_trims_whitespace() {
            assert!(Price::parse("  42.50  ").is_ok());
        }

        #[test]
        fn test_negative_allowed() {
            // Sign does not count as a digit
            assert!(Price::parse("-99999999.99").is_ok());
        }

        #[test]
        fn test_invalid_text() {
            assert_eq!(Price::parse("cheap").unwrap_err(), PriceError::Invalid);
            assert_eq!(Price::parse("").unwrap_err(), PriceError::Invalid);
            assert_eq!(Price::parse("12.3.4").unwrap_err(), PriceError::Invalid);
        }
    }

    mod price_precision {
        use super::*;

        #[test]
        fn test_two_decimal_places_ok() {
            assert!(Price::parse("1.25").is_ok());
        }

        #[test]
        fn test_three_decimal_places_rejected() {
            assert!(matches!(
                Price::parse("1.255"),
                Err(PriceError::TooManyDecimalPlaces { places: 3 })
            ));
        }

        #[test]
        fn test_trailing_zero_scale_counts() {
            // "1.250" carries scale 3 even though the value fits
            assert!(matches!(
                Price::parse("1.250"),
                Err(PriceError::TooManyDecimalPlaces { .. })
            ));
        }

        #[test]
        fn test_max_whole_digits_ok() {
            // 8 whole digits + 2 decimal places = 10 total
            assert!(Price::parse("99999999.99").is_ok());
        }

        #[test]
        fn test_too_many_whole_digits_rejected() {
            assert!(matches!(
                Price::parse("123456789.00"),
                Err(PriceError::TooManyWholeDigits { digits: 9 })
            ));
            assert!(matches!(
                Price::parse("10000000000"),
                Err(PriceError::TooManyWholeDigits { .. })
            ));
        }

        #[test]
        fn test_fraction_only_value() {
            // 0.05 has zero whole digits
            assert!(Price::parse("0.05").is_ok());
        }
    }

    mod price_conversions {
        use super::*;

        #[test]
        fn test_from_stored() {
            let stored = Decimal::from_str("123.45").unwrap();
            let price = Price::from_stored(stored);
            assert_eq!(price.as_decimal(), stored);
        }

        #[test]
        fn test_into_decimal() {
            let price = Price::parse("7.00").unwrap();
            let decimal: Decimal = price.into();
            assert_eq!(decimal.to_string(), "7.00");
        }
    }

    mod price_errors {
        use super::*;

        #[test]
        fn test_error_messages() {
            assert_eq!(PriceError::Invalid.to_string(), "A valid number is required.");
            assert!(
                PriceError::TooManyDecimalPlaces { places: 3 }
                    .to_string()
                    .contains("2 decimal places")
            );
            assert!(
                PriceError::TooManyWholeDigits { digits: 9 }
                    .to_string()
                    .contains("8 digits before the decimal point")
            );
        }
    }

    mod image_upload {
        use super::*;

        #[test]
        fn test_acceptable_upload() {
            let upload = ImageUpload::new("plot.png", vec![0u8; 128]);
            assert!(upload.problems(1024).is_empty());
        }

        #[test]
        fn test_empty_file_rejected() {
            let upload = ImageUpload::new("plot.png", Vec::new());
            let problems = upload.problems(1024);
            assert_eq!(problems, vec!["The submitted file is empty.".to_string()]);
        }

        #[test]
        fn test_oversize_file_rejected() {
            let upload = ImageUpload::new("plot.png", vec![0u8; 2048]);
            let problems = upload.problems(1024);
            assert_eq!(problems.len(), 1);
            assert!(problems[0].contains("no more than 1024 bytes"));
        }
    }
}
