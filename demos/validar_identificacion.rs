use factura_ec::identificacion::{regime_of, validate_cedula, validate_ruc};

fn main() {
    let cedulas = ["1234567897", "1710034065", "1234567890", "123", "25345678971"];
    println!("Cédulas:");
    for cedula in cedulas {
        match validate_cedula(cedula) {
            Ok(()) => println!("  {cedula:<15} válida"),
            Err(e) => println!("  {cedula:<15} inválida: {e}"),
        }
    }

    let rucs = [
        "1234567897001", // natural person
        "1760011611001", // public sector
        "1790011674001", // private company
        "1234567897002", // wrong suffix for a natural person
        "1774567897001", // unassigned regime marker
    ];
    println!("\nRUCs:");
    for ruc in rucs {
        let regime = regime_of(ruc)
            .map(|r| format!("{r:?}"))
            .unwrap_or_else(|| "—".to_string());
        match validate_ruc(ruc) {
            Ok(()) => println!("  {ruc:<15} válido   ({regime})"),
            Err(e) => println!("  {ruc:<15} inválido ({regime}): {e}"),
        }
    }
}
