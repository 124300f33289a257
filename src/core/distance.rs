use crate::models::{BoundingBox, Location};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `from` - First point, degrees
/// * `to` - Second point, degrees
///
/// # Returns
/// Great-circle distance in kilometers
#[inline]
pub fn haversine_distance(from: &Location, to: &Location) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Whether a point lies on the globe
///
/// Latitude must be within [-90, 90] and longitude within [-180, 180].
/// NaN and infinities are rejected.
#[inline]
pub fn is_valid_coordinate(location: &Location) -> bool {
    location.latitude.is_finite()
        && location.longitude.is_finite()
        && (-90.0..=90.0).contains(&location.latitude)
        && (-180.0..=180.0).contains(&location.longitude)
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine, so the profile store uses it to pre-filter.
///
/// The longitude half-width is taken at the tangent point of the search
/// circle, `asin(sin(r/R) / cos(lat))`, not along the center's parallel:
/// great circles bend toward the pole, so at high latitudes the widest
/// point of the circle sits poleward of the center.
///
/// When the box would cross the antimeridian or a pole the affected axis is
/// widened to its full range, so the box never excludes a point within
/// `radius_km`.
pub fn calculate_bounding_box(center: &Location, radius_km: f64) -> BoundingBox {
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat_delta = angular.to_degrees();

    let cos_lat = center.latitude.to_radians().cos().abs();
    let circle_contains_pole = angular.sin() >= cos_lat || angular >= std::f64::consts::FRAC_PI_2;
    let lon_delta = if circle_contains_pole {
        f64::INFINITY
    } else {
        (angular.sin() / cos_lat).asin().to_degrees()
    };

    let (min_lat, max_lat) = (center.latitude - lat_delta, center.latitude + lat_delta);
    let crosses_pole = min_lat < -90.0 || max_lat > 90.0;

    let (min_lon, max_lon) = (center.longitude - lon_delta, center.longitude + lon_delta);
    let wraps = crosses_pole || !lon_delta.is_finite() || min_lon < -180.0 || max_lon > 180.0;

    BoundingBox {
        min_lat: min_lat.max(-90.0),
        max_lat: max_lat.min(90.0),
        min_lon: if wraps { -180.0 } else { min_lon },
        max_lon: if wraps { 180.0 } else { max_lon },
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: &Location, bbox: &BoundingBox) -> bool {
    point.latitude >= bbox.min_lat
        && point.latitude <= bbox.max_lat
        && point.longitude >= bbox.min_lon
        && point.longitude <= bbox.max_lon
}
