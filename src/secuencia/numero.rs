//! Legal document number format: `NNN-NNN-NNNNNNNNN`.

/// Format a document number from establishment code, emission point
/// code, and sequential — zero-padded to widths 3, 3, and 9.
///
/// # Panics
///
/// Panics if a component exceeds its field width (`establecimiento` or
/// `punto_emision` over 999, `secuencial` over 999 999 999). Callers
/// pass codes from registered emission points and sequentials from the
/// sequencer, both of which stay in range; anything else is a caller
/// bug, not input data.
pub fn format_numero(establecimiento: u16, punto_emision: u16, secuencial: u64) -> String {
    assert!(establecimiento <= 999, "establecimiento code out of range");
    assert!(punto_emision <= 999, "punto de emisión code out of range");
    assert!(secuencial <= 999_999_999, "secuencial out of range");
    format!("{establecimiento:03}-{punto_emision:03}-{secuencial:09}")
}

/// Parse a document number back into its components.
///
/// Accepts only the exact `\d{3}-\d{3}-\d{9}` shape — no surrounding
/// whitespace, no missing padding, no other separators.
pub fn parse_numero(numero: &str) -> Option<(u16, u16, u64)> {
    let bytes = numero.as_bytes();
    if bytes.len() != 17 || bytes[3] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let (est, pto, seq) = (&numero[..3], &numero[4..7], &numero[8..]);
    for part in [est, pto, seq] {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some((est.parse().ok()?, pto.parse().ok()?, seq.parse().ok()?))
}
