#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(clave) = factura_ec::clave::ClaveAcceso::parse(s) {
            // Accessors on an accepted key must not panic either.
            let _ = clave.fecha_emision();
            let _ = clave.tipo();
            let _ = clave.ambiente();
            let _ = clave.secuencial();
            let _ = clave.codigo_numerico();
            let _ = clave.tipo_emision();
        }
    }
});
