use std::fmt;

/// Problems found in an intake form before anything is sent to the stores.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingName,
    MissingPricing,
    PricingNotANumber(String),
    NegativePricing,
    MissingPostalCode,
    MissingImage,
    MissingGoogleLink,
}

impl ValidationError {
    /// Text shown to the admin in the blocking notification.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingName
            | ValidationError::MissingPricing
            | ValidationError::MissingPostalCode
            | ValidationError::MissingImage
            | ValidationError::MissingGoogleLink => "Please fill in all fields.",
            ValidationError::PricingNotANumber(_) => "Pricing must be a number.",
            ValidationError::NegativePricing => "Pricing can't be negative.",
        }
    }

    /// Form field the problem is about.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingPricing
            | ValidationError::PricingNotANumber(_)
            | ValidationError::NegativePricing => "pricing",
            ValidationError::MissingPostalCode => "postal code",
            ValidationError::MissingImage => "image",
            ValidationError::MissingGoogleLink => "google link",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::PricingNotANumber(value) => {
                write!(f, "{} (got {:?})", self.message(), value)
            }
            _ => write!(f, "{} ({})", self.message(), self.field()),
        }
    }
}
