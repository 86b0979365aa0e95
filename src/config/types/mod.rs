//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Errors, warnings and aggregated diagnostics  |
//! | `field`  | Field paths naming the offending entry       |
//! | `handle` | Process-wide config handle (thread-safe)     |

mod error;
mod field;
pub mod handle;

pub(crate) use error::print_warnings;
pub use error::{ConfigDiagnostics, ConfigError, LoadError, Warning};
pub use field::{FIELDS, FieldPath, Fields};
pub use handle::{cfg, init_config, reload_config};
