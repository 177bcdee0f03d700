/// Geographic position in decimal degrees (WGS 84).
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat : f64,
    pub lon : f64,
}

impl Location {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}
