use std::fmt;

/// Bounding box used as a search parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub latitude_begin: f64,
    pub latitude_end: f64,
    pub longitude_begin: f64,
    pub longitude_end: f64,
}

impl MapRegion {
    pub fn new(latitude_begin: f64, latitude_end: f64, longitude_begin: f64, longitude_end: f64) -> Self {
        MapRegion {
            latitude_begin,
            latitude_end,
            longitude_begin,
            longitude_end,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude_begin..=self.latitude_end).contains(&latitude)
            && (self.longitude_begin..=self.longitude_end).contains(&longitude)
    }
}

impl fmt::Display for MapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lat: {} - {}. Long: {} - {}",
            self.latitude_begin, self.latitude_end, self.longitude_begin, self.longitude_end
        )
    }
}
