//! Barcode and QR symbol encoding.

use barcoders::sym::code128::Code128;
use labelkit_core::SymbolError;
use qrcode::{Color, QrCode};

/// Code 128 character set B start marker understood by the encoder.
const CODE128_SET_B: char = 'Ɓ';

/// Encoded symbol modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolMatrix {
    /// One row of bars; `true` is a dark module.
    Linear(Vec<bool>),
    /// Square matrix, row-major, `width` x `width`.
    Square { width: usize, modules: Vec<bool> },
}

impl SymbolMatrix {
    pub fn is_dark(&self, col: usize, row: usize) -> bool {
        match self {
            Self::Linear(bars) => bars.get(col).copied().unwrap_or(false),
            Self::Square { width, modules } => {
                col < *width && modules.get(row * width + col).copied().unwrap_or(false)
            }
        }
    }

    /// Columns in the symbol.
    pub fn columns(&self) -> usize {
        match self {
            Self::Linear(bars) => bars.len(),
            Self::Square { width, .. } => *width,
        }
    }
}

/// Encode printable ASCII as a Code 128 (set B) bar pattern.
pub fn encode_code128(value: &str) -> Result<SymbolMatrix, SymbolError> {
    if value.trim().is_empty() {
        return Err(SymbolError::Empty);
    }
    let payload = format!("{}{}", CODE128_SET_B, value);
    let symbol = Code128::new(payload).map_err(|e| SymbolError::Unencodable {
        symbology: "Code 128",
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(SymbolMatrix::Linear(
        symbol.encode().into_iter().map(|m| m == 1).collect(),
    ))
}

/// Encode arbitrary UTF-8 as a QR code.
pub fn encode_qr(value: &str) -> Result<SymbolMatrix, SymbolError> {
    if value.trim().is_empty() {
        return Err(SymbolError::Empty);
    }
    let code = QrCode::new(value.as_bytes()).map_err(|e| SymbolError::Unencodable {
        symbology: "QR",
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(SymbolMatrix::Square {
        width: code.width(),
        modules: code.to_colors().into_iter().map(|c| c == Color::Dark).collect(),
    })
}
