//! Great-circle math and navigation links for a gym location.

use eggwatch_core::Units;

const EARTH_RADIUS_M: f64 = 6_371_000.0;
const YARDS_PER_METER: f64 = 1.093_613_3;
const YARDS_PER_MILE: f64 = 1760.0;
const METERS_PER_KM: f64 = 1000.0;

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Haversine distance in metres between two `(lat, lng)` points.
#[must_use]
pub fn earth_distance_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lat2) = (from.0.to_radians(), to.0.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (to.1 - from.1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing from `from` to `to`, in degrees within `[0, 360)`.
#[must_use]
pub fn bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lat2) = (from.0.to_radians(), to.0.to_radians());
    let d_lng = (to.1 - from.1).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Eight-point compass direction a viewer at `from` has to head to reach `to`.
#[must_use]
pub fn cardinal_direction(from: (f64, f64), to: (f64, f64)) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = ((bearing_deg(from, to) + 22.5) / 45.0).floor() as usize;
    COMPASS[sector % COMPASS.len()]
}

/// Human-readable distance: `m`/`km` for metric, `yd`/`mi` for imperial.
#[must_use]
pub fn distance_as_str(meters: f64, units: Units) -> String {
    match units {
        Units::Metric if meters > METERS_PER_KM => format!("{:.1}km", meters / METERS_PER_KM),
        Units::Metric => format!("{meters:.1}m"),
        Units::Imperial => {
            let yards = meters * YARDS_PER_METER;
            if yards > YARDS_PER_MILE {
                format!("{:.1}mi", yards / YARDS_PER_MILE)
            } else {
                format!("{yards:.1}yd")
            }
        }
    }
}

/// Google Maps search view, or turn-by-turn directions with `nav`.
#[must_use]
pub fn gmaps_link(lat: f64, lng: f64, nav: bool) -> String {
    if nav {
        format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
    } else {
        format!("https://www.google.com/maps/search/?api=1&query={lat},{lng}")
    }
}

#[must_use]
pub fn applemaps_link(lat: f64, lng: f64, nav: bool) -> String {
    if nav {
        format!("https://maps.apple.com/maps?daddr={lat},{lng}&dirflg=d")
    } else {
        format!("https://maps.apple.com/maps?q={lat},{lng}")
    }
}

#[must_use]
pub fn waze_link(lat: f64, lng: f64, nav: bool) -> String {
    if nav {
        format!("https://waze.com/ul?ll={lat},{lng}&navigate=yes")
    } else {
        format!("https://waze.com/ul?ll={lat},{lng}")
    }
}
