use chrono::NaiveDate;
use factura_ec::clave::ClaveBuilder;
use factura_ec::core::{Ambiente, DocumentoTipo};

fn main() {
    // Generate the clave de acceso for a production factura
    let mut rng = rand::thread_rng();
    let clave = ClaveBuilder::new(
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        DocumentoTipo::Factura,
        "1790011674001",
    )
    .ambiente(Ambiente::Produccion)
    .establecimiento("001")
    .punto_emision("002")
    .secuencial(123)
    .generar(&mut rng)
    .expect("arguments are in range");

    println!("Clave de acceso: {clave}");
    println!("---");
    println!("Fecha:           {}", clave.fecha_emision().unwrap());
    println!(
        "Comprobante:     {} ({})",
        clave.tipo().unwrap().description(),
        clave.tipo().unwrap().code()
    );
    println!("RUC emisor:      {}", clave.ruc());
    println!("Ambiente:        {:?}", clave.ambiente().unwrap());
    println!(
        "Punto:           {}-{}",
        clave.establecimiento(),
        clave.punto_emision()
    );
    println!("Secuencial:      {}", clave.secuencial());
    println!("Código numérico: {:08}", clave.codigo_numerico());
    println!("Dígito:          {}", clave.digito_verificador());
}
