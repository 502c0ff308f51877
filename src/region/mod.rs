//! ISO region value objects: country and language codes.

mod country;
mod error;
mod language;

pub use country::CountryCode;
pub use error::RegionError;
pub use language::LanguageCode;
