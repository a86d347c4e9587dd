//! SPCK - Sparse GF(2) LDPC Parity-Check Code Construction
//!
//! This library builds random regular low-density parity-check matrices
//! and reduces them to row-reduced systematic form.
//!
//! ## Architecture
//!
//! SPCK follows a clean computation/collaborator separation:
//!
//! - **spck-core**: The dual-view sparse binary matrix, pivot elimination,
//!   rank-deficiency resolution and column permutation (no I/O, no
//!   randomness)
//! - **spck**: Random generation, persisted code files, and the driving
//!   CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use spck::{build_code, CodeParams};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let code = build_code(CodeParams::new(4, 6, 8), &mut rng).unwrap();
//! assert_eq!(code.n, 16);
//! ```

// Re-export core abstractions and the elimination pipeline
pub use spck_core::{
    // Matrix representation and view converters
    columns_from_rows, rows_from_columns, SparseBinMatrix,
    // Core traits
    BinaryMatrix, BinaryMatrixOps,
    // Pipeline stages
    find_pivots, permute_columns, resolve, resolve_and_permute, systematic_form,
    // Error handling
    Result, SpckError,
    // Validation utilities
    validate_dual_views, validate_regular_dims, validate_systematic,
};

// Collaborator modules
pub mod codegen;
pub mod generator;
pub mod io;

// Public exports
pub use codegen::{build_code, CodeParams, SystematicCode};
pub use generator::GeneratorConfig;
pub use io::{read_code_file, write_code_file};

#[cfg(feature = "serde")]
pub use io::{read_description, write_description, CodeDescription};
