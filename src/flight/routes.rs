use crate::core::fold_key;

/// Great-circle estimates for frequent routes out of Romania, in km.
pub const COMMON_ROUTES: &[(&str, &str, u32)] = &[
    ("București", "Londra", 2100),
    ("București", "Paris", 1850),
    ("București", "Berlin", 1300),
    ("București", "Roma", 1150),
    ("București", "Madrid", 2500),
    ("București", "Amsterdam", 1900),
    ("București", "Viena", 650),
    ("București", "Dubai", 3500),
    ("București", "New York", 8000),
    ("Cluj", "Londra", 2000),
    ("Cluj", "Munchen", 900),
    ("Timișoara", "Dortmund", 1200),
];

/// Distance of a known route in either direction.
pub fn route_distance(from: &str, to: &str) -> Option<u32> {
    let (from, to) = (route_key(from), route_key(to));
    COMMON_ROUTES
        .iter()
        .find(|(a, b, _)| {
            let (a, b) = (route_key(a), route_key(b));
            (a == from && b == to) || (a == to && b == from)
        })
        .map(|&(_, _, km)| km)
}

fn route_key(city: &str) -> String {
    fold_key(city).replace(['-', ' '], "").replace('ü', "u")
}
