mod city;
mod lab;

pub use city::{cities, City};
pub use lab::{LabRecord, NewLabRecord, FIELD_NAME, FIELD_POSTAL_CODE};
