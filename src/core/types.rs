use serde::{Deserialize, Serialize};

/// SRI comprobante (fiscal document) kinds and their two-digit codes.
///
/// The codes appear verbatim inside claves de acceso and in the
/// authorized XML documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentoTipo {
    /// 01 — Factura.
    Factura,
    /// 03 — Liquidación de compra de bienes y prestación de servicios.
    LiquidacionCompra,
    /// 04 — Nota de crédito.
    NotaCredito,
    /// 05 — Nota de débito.
    NotaDebito,
    /// 06 — Guía de remisión.
    GuiaRemision,
    /// 07 — Comprobante de retención.
    Retencion,
}

impl DocumentoTipo {
    /// Two-digit SRI code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Factura => "01",
            Self::LiquidacionCompra => "03",
            Self::NotaCredito => "04",
            Self::NotaDebito => "05",
            Self::GuiaRemision => "06",
            Self::Retencion => "07",
        }
    }

    /// Parse from the two-digit SRI code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Factura),
            "03" => Some(Self::LiquidacionCompra),
            "04" => Some(Self::NotaCredito),
            "05" => Some(Self::NotaDebito),
            "06" => Some(Self::GuiaRemision),
            "07" => Some(Self::Retencion),
            _ => None,
        }
    }

    /// Official Spanish name per the SRI registry.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Factura => "Factura",
            Self::LiquidacionCompra => {
                "Liquidación de compra de bienes y prestación de servicios"
            }
            Self::NotaCredito => "Nota de crédito",
            Self::NotaDebito => "Nota de débito",
            Self::GuiaRemision => "Guía de remisión",
            Self::Retencion => "Comprobante de retención",
        }
    }

    /// Whether an emission point keeps a dedicated sequential counter
    /// for this kind.
    pub fn is_sequenced(&self) -> bool {
        matches!(
            self,
            Self::Factura | Self::NotaCredito | Self::NotaDebito | Self::Retencion
        )
    }
}

/// SRI environment a comprobante is issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ambiente {
    /// 1 — Pruebas (certification/test environment).
    Pruebas,
    /// 2 — Producción.
    Produccion,
}

impl Ambiente {
    /// Single-digit code used in the clave de acceso.
    pub fn code(&self) -> char {
        match self {
            Self::Pruebas => '1',
            Self::Produccion => '2',
        }
    }

    /// Parse from the single-digit code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Self::Pruebas),
            '2' => Some(Self::Produccion),
            _ => None,
        }
    }
}

/// Emission mode of a comprobante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoEmision {
    /// 1 — Normal online emission.
    Normal,
    /// 2 — Contingency (offline) emission.
    Contingencia,
}

impl TipoEmision {
    /// Single-digit code used in the clave de acceso.
    pub fn code(&self) -> char {
        match self {
            Self::Normal => '1',
            Self::Contingencia => '2',
        }
    }

    /// Parse from the single-digit code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Self::Normal),
            '2' => Some(Self::Contingencia),
            _ => None,
        }
    }
}
