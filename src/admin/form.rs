use crate::error::ValidationError;
use crate::tools;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            bytes,
        }
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Intake form contents as typed by the admin. Every setter returns a new form.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeForm {
    name: String,
    pricing: String,
    rating: f64,
    postal_code: String,
    image: Option<ImageFile>,
    google_link: String,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            pricing: String::new(),
            rating: MIN_RATING,
            postal_code: String::new(),
            image: None,
            google_link: String::new(),
        }
    }
}

/// Checked form contents, ready to be uploaded and written.
#[derive(Debug, Clone, PartialEq)]
pub struct LabSubmission {
    pub name: String,
    pub pricing: f64,
    pub rating: f64,
    pub postal_code: String,
    pub image: ImageFile,
    pub google_link: String,
}

impl IntakeForm {
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self
        }
    }

    pub fn with_pricing(self, pricing: &str) -> Self {
        Self {
            pricing: pricing.to_string(),
            ..self
        }
    }

    /// The rating slider can't leave its range, so neither can this.
    pub fn with_rating(self, rating: f64) -> Self {
        let rating = match rating.is_nan() {
            true => MIN_RATING,
            false => rating.max(MIN_RATING).min(MAX_RATING),
        };
        Self { rating, ..self }
    }

    pub fn with_postal_code(self, postal_code: &str) -> Self {
        Self {
            postal_code: postal_code.to_string(),
            ..self
        }
    }

    pub fn with_image(self, image: Option<ImageFile>) -> Self {
        Self { image, ..self }
    }

    pub fn with_google_link(self, google_link: &str) -> Self {
        Self {
            google_link: google_link.to_string(),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pricing(&self) -> &str {
        &self.pricing
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn google_link(&self) -> &str {
        &self.google_link
    }

    pub fn validate(&self) -> Result<LabSubmission, ValidationError> {
        let name = tools::empty_string_as_option(&self.name).ok_or(ValidationError::MissingName)?;
        let pricing = tools::empty_string_as_option(&self.pricing)
            .ok_or(ValidationError::MissingPricing)?;
        let postal_code = tools::empty_string_as_option(&self.postal_code)
            .ok_or(ValidationError::MissingPostalCode)?;
        let image = self.image.clone().ok_or(ValidationError::MissingImage)?;
        let google_link = tools::empty_string_as_option(&self.google_link)
            .ok_or(ValidationError::MissingGoogleLink)?;

        let pricing = match pricing.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Err(ValidationError::PricingNotANumber(pricing)),
        };
        if pricing < 0.0 {
            return Err(ValidationError::NegativePricing);
        }

        Ok(LabSubmission {
            name,
            pricing,
            rating: self.rating,
            postal_code,
            image,
            google_link,
        })
    }
}
