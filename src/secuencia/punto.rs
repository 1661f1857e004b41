use serde::{Deserialize, Serialize};

use crate::core::DocumentoTipo;

use super::numero::format_numero;

/// A registered point of sale within an establishment.
///
/// This is a read-only snapshot of the persisted entity, carried for
/// display: the counters here show the *next* sequential each kind
/// would take, but numbers are only ever assigned through
/// [`DocumentSequencer`](super::DocumentSequencer) against the durable
/// store. Counters never reset — a voided document keeps its number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuntoEmision {
    /// 3-digit code within the establishment (`1..=999`).
    pub codigo: u16,
    /// 3-digit code of the owning establishment.
    pub establecimiento: u16,
    /// Whether the point may issue new documents.
    pub activo: bool,
    /// Next factura sequential.
    pub secuencial_factura: u64,
    /// Next nota de crédito sequential.
    pub secuencial_nota_credito: u64,
    /// Next nota de débito sequential.
    pub secuencial_nota_debito: u64,
    /// Next retención sequential.
    pub secuencial_retencion: u64,
}

impl PuntoEmision {
    /// A fresh emission point with all counters at 1.
    ///
    /// # Panics
    ///
    /// Panics if either code is 0 or over 999 — codes come from the
    /// tenant's registration flow, which enforces the 3-digit range.
    pub fn new(establecimiento: u16, codigo: u16) -> Self {
        assert!(
            (1..=999).contains(&establecimiento),
            "establecimiento code out of range"
        );
        assert!((1..=999).contains(&codigo), "punto de emisión code out of range");
        Self {
            codigo,
            establecimiento,
            activo: true,
            secuencial_factura: 1,
            secuencial_nota_credito: 1,
            secuencial_nota_debito: 1,
            secuencial_retencion: 1,
        }
    }

    /// Next sequential for a comprobante kind; `None` for kinds this
    /// point does not sequence.
    pub fn secuencial(&self, tipo: DocumentoTipo) -> Option<u64> {
        match tipo {
            DocumentoTipo::Factura => Some(self.secuencial_factura),
            DocumentoTipo::NotaCredito => Some(self.secuencial_nota_credito),
            DocumentoTipo::NotaDebito => Some(self.secuencial_nota_debito),
            DocumentoTipo::Retencion => Some(self.secuencial_retencion),
            _ => None,
        }
    }

    /// The document number the next comprobante of this kind would
    /// take, formatted for display.
    pub fn proximo_numero(&self, tipo: DocumentoTipo) -> Option<String> {
        self.secuencial(tipo)
            .map(|seq| format_numero(self.establecimiento, self.codigo, seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_point_starts_at_one() {
        let punto = PuntoEmision::new(1, 2);
        assert!(punto.activo);
        assert_eq!(punto.secuencial(DocumentoTipo::Factura), Some(1));
        assert_eq!(punto.secuencial(DocumentoTipo::Retencion), Some(1));
    }

    #[test]
    fn unsequenced_kinds_have_no_counter() {
        let punto = PuntoEmision::new(1, 2);
        assert_eq!(punto.secuencial(DocumentoTipo::GuiaRemision), None);
        assert_eq!(punto.secuencial(DocumentoTipo::LiquidacionCompra), None);
        assert_eq!(punto.proximo_numero(DocumentoTipo::GuiaRemision), None);
    }

    #[test]
    fn proximo_numero_formats() {
        let mut punto = PuntoEmision::new(1, 2);
        punto.secuencial_factura = 124;
        assert_eq!(
            punto.proximo_numero(DocumentoTipo::Factura),
            Some("001-002-000000124".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "punto de emisión")]
    fn zero_codigo_rejected() {
        PuntoEmision::new(1, 0);
    }
}
