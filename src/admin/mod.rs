mod form;
mod intake;

pub use form::{ImageFile, IntakeForm, LabSubmission, MAX_RATING, MIN_RATING};
pub use intake::{AdminForm, IntakeService};
