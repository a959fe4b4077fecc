//! Result reporting
//!
//! - **text**: console tables printed after a run
//! - **json**: machine-readable report written with `--json-output`

pub mod json;
pub mod text;
