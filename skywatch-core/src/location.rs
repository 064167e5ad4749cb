use async_trait::async_trait;

use crate::{error::LocationError, model::Coordinate};

/// Source of the device's current position.
///
/// This is the boundary to the host platform's geolocation facility. A
/// failure here is a pre-condition failure: the session short-circuits
/// before any network request is made.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current(&self) -> Result<Coordinate, LocationError>;
}

/// A source that always yields the same coordinate. Backs the CLI's
/// `--lat`/`--lon` path, where the "device position" is supplied by hand.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_yields_its_coordinate() {
        let coord = Coordinate::new(50.45, 30.52).expect("valid coordinate");
        let source = FixedLocation(coord);

        let resolved = source.current().await.expect("fixed source cannot fail");
        assert_eq!(resolved, coord);
    }
}
