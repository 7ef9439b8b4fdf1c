use serde::Serialize;

/// Capture location attached to an attendance event.
/// Latitude/longitude come from the capturing device; the address is the
/// reverse-geocoded display string when the device resolved one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, address: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            address,
        }
    }

    /// Basic WGS84 range check. The classifier never looks at coordinates,
    /// so this is enforced only at insertion time.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Display string: prefer the resolved address, fall back to "lat, lon".
    pub fn display(&self) -> String {
        match &self.address {
            Some(addr) if !addr.trim().is_empty() => addr.clone(),
            _ => format!("{:.5}, {:.5}", self.latitude, self.longitude),
        }
    }
}
