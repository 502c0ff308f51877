//! Geographic coordinates in WGS 84 decimal degrees.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean earth radius in metres, used by the haversine distance.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Errors from coordinate construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoordinateError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(Decimal),

    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(Decimal),

    /// String not in the `"<latitude>,<longitude>"` form.
    #[error("invalid coordinates string '{0}'")]
    InvalidCoordinates(String),
}

/// An immutable latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: Decimal,
    longitude: Decimal,
}

impl Coordinates {
    /// Validate and construct; latitude must lie in [-90, 90] and
    /// longitude in [-180, 180].
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, CoordinateError> {
        if !(dec!(-90)..=dec!(90)).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(dec!(-180)..=dec!(180)).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Great-circle distance to `other` in metres, via the haversine
    /// formula on a spherical earth. Computed in `f64`; the spherical
    /// approximation is good to roughly 0.5 %.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        // in-range by construction, so the f64 conversion cannot fail
        let lat1 = deg_to_rad(self.latitude);
        let lat2 = deg_to_rad(other.latitude);
        let dlat = lat2 - lat1;
        let dlon = deg_to_rad(other.longitude) - deg_to_rad(self.longitude);

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}

fn deg_to_rad(degrees: Decimal) -> f64 {
    degrees.to_f64().unwrap_or_default().to_radians()
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = CoordinateError;

    /// Parse the `"<latitude>,<longitude>"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidCoordinates(s.into());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<Decimal>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<Decimal>().map_err(|_| invalid())?;
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let berlin = Coordinates::new(dec!(52.52), dec!(13.405)).unwrap();
        assert_eq!(berlin.latitude(), dec!(52.52));
        assert_eq!(berlin.longitude(), dec!(13.405));
    }

    #[test]
    fn poles_and_antimeridian_are_valid() {
        assert!(Coordinates::new(dec!(90), dec!(0)).is_ok());
        assert!(Coordinates::new(dec!(-90), dec!(180)).is_ok());
        assert!(Coordinates::new(dec!(0), dec!(-180)).is_ok());
    }

    #[test]
    fn out_of_range_latitude() {
        assert_eq!(
            Coordinates::new(dec!(90.01), dec!(0)),
            Err(CoordinateError::LatitudeOutOfRange(dec!(90.01)))
        );
        assert!(Coordinates::new(dec!(-91), dec!(0)).is_err());
    }

    #[test]
    fn out_of_range_longitude() {
        assert_eq!(
            Coordinates::new(dec!(0), dec!(180.5)),
            Err(CoordinateError::LongitudeOutOfRange(dec!(180.5)))
        );
    }

    #[test]
    fn display_and_parse_round_trip() {
        let c = Coordinates::new(dec!(52.52), dec!(13.405)).unwrap();
        assert_eq!(c.to_string(), "52.52,13.405");
        assert_eq!("52.52,13.405".parse::<Coordinates>().unwrap(), c);
        assert!("52.52".parse::<Coordinates>().is_err());
        assert!("abc,13".parse::<Coordinates>().is_err());
        assert!("91,0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn berlin_to_munich_distance() {
        let berlin = Coordinates::new(dec!(52.5200), dec!(13.4050)).unwrap();
        let munich = Coordinates::new(dec!(48.1374), dec!(11.5755)).unwrap();
        let d = berlin.distance_to(&munich);
        // roughly 504 km as the crow flies
        assert!((500_000.0..510_000.0).contains(&d), "distance was {d}");
        assert_eq!(berlin.distance_to(&berlin), 0.0);
    }
}
