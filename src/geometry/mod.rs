use num_traits::{Num, Signed, Float};
use serde::{Deserialize, Serialize};


/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}

/// Great-circle distance in meters between two (longitude, latitude) pairs given in degrees
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T>(lon1: T, lat1: T, lon2: T, lat2: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let radius = T::from(EARTH_RADIUS_M).unwrap_or_else(T::one);

    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / two).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / two).sin().powi(2);
    // rounding can push `a` slightly past 1 for antipodal points
    two * radius * a.min(T::one()).sqrt().asin()
}


/// 2D Point
/// On road networks x is the longitude and y the latitude
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn euclidean(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    pub fn manhattan(&self, other: &Point) -> f64 {
        manhattan_distance(self.x, self.y, other.x, other.y)
    }

    /// Meters along the earth's surface, treating x/y as longitude/latitude degrees
    pub fn haversine(&self, other: &Point) -> f64 {
        haversine(self.x, self.y, other.x, other.y)
    }
}
