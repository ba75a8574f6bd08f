//! Exact Quine-McCluskey Boolean minimization with Petrick-style cover search.

pub mod error;
pub mod qm;

pub use error::QmError;
pub use qm::{ProblemConfig, QmProblem, TermKind, TermSpec};
