//! Free-text forward geocoding.
//!
//! The backend is a black box: any service that maps free text to an
//! ordered list of coordinate matches will do. The first entry wins.

mod nominatim;

pub use nominatim::NominatimClient;

use crate::error::BackendError;

/// A single match returned by a forward-geocoding backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
}

/// Forward-geocoding capability: free text in, ordered matches out.
#[allow(async_fn_in_trait)]
pub trait ForwardGeocoder {
    async fn geocode(&self, text: &str) -> Result<Vec<GeocodeMatch>, BackendError>;
}
