//! Error types for systematic-form construction

/// Errors that can occur while building or reducing parity-check matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpckError {
    /// Generator parameters do not satisfy n*c = m*d
    DimensionMismatch,
    /// Row or column index out of bounds
    IndexOutOfBounds,
    /// Row and column views disagree about an entry
    InconsistentViews,
    /// Pivot assignment does not match the matrix it was computed from
    PivotMismatch,
}

impl core::fmt::Display for SpckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpckError::DimensionMismatch => "Generator parameters violate n*c = m*d",
            SpckError::IndexOutOfBounds => "Index out of bounds",
            SpckError::InconsistentViews => "Row and column views are not dual-consistent",
            SpckError::PivotMismatch => "Pivot assignment does not match the matrix",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SpckError {}

/// Result type for SPCK operations
pub type Result<T> = core::result::Result<T, SpckError>;
