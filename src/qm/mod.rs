//! Quine-McCluskey Boolean minimization.
//!
//! Leaf-first module layout: term utilities, then the implicant generator,
//! then the incidence/reduction/search stages, then rendering, then the
//! problem object that orchestrates all of the above.

pub mod alphabet;
pub mod incidence;
pub mod primes;
pub mod problem;
pub mod reduce;
pub mod render;
pub mod search;
pub mod term;

pub use primes::PrimeMap;
pub use problem::{ProblemConfig, QmProblem, TermKind, TermSpec};
pub use search::Cover;
