#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(rules) = impozit::core::FiscalRules::from_toml_str(s) {
            let _ = rules.calendar();
        }
    }
});
