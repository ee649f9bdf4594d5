#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<impozit::cartax::VehicleType>();
        let _ = impozit::cartax::location_coefficient(s);
        if let Some((from, to)) = s.split_once('|') {
            let _ = impozit::flight::route_distance(from, to);
        }
    }
});
