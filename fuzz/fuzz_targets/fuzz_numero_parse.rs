#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — a parsed number must round-trip.
        if let Some((est, pto, seq)) = factura_ec::secuencia::parse_numero(s) {
            assert_eq!(factura_ec::secuencia::format_numero(est, pto, seq), s);
        }
    }
});
