use chrono::NaiveDate;
use factura_ec::clave::ClaveBuilder;
use factura_ec::core::{Ambiente, DocumentoTipo};
use factura_ec::secuencia::{DocumentSequencer, MemorySequentialStore, SequenceScope};

fn main() {
    // The full document-creation flow: reserve a sequential, format the
    // legal number, derive the clave de acceso.
    let sequencer = DocumentSequencer::new(MemorySequentialStore::new());
    let scope = SequenceScope::new("tenant-demo", "matriz-caja-1");
    let mut rng = rand::thread_rng();

    for _ in 0..3 {
        let (secuencial, numero) = sequencer
            .reserve_numero(&scope, DocumentoTipo::Factura, 1, 2)
            .expect("in-memory store does not fail");

        let clave = ClaveBuilder::new(
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            DocumentoTipo::Factura,
            "1790011674001",
        )
        .ambiente(Ambiente::Produccion)
        .establecimiento("001")
        .punto_emision("002")
        .secuencial(secuencial)
        .generar(&mut rng)
        .expect("arguments are in range");

        println!("Factura {numero}  clave {clave}");
    }

    // Counters per kind are independent
    let (_, nc) = sequencer
        .reserve_numero(&scope, DocumentoTipo::NotaCredito, 1, 2)
        .unwrap();
    println!("Nota de crédito {nc}");

    println!(
        "Última factura reservada: {}",
        sequencer
            .peek_current(&scope, DocumentoTipo::Factura)
            .unwrap()
    );
}
