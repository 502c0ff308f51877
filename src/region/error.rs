use thiserror::Error;

/// Errors from region code lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegionError {
    #[error("unknown ISO 3166-1 alpha-2 country code '{0}'")]
    UnknownCountry(String),

    #[error("unknown ISO 639-1 language code '{0}'")]
    UnknownLanguage(String),
}
