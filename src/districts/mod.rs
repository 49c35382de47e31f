pub mod alerts;
pub mod defs;
pub mod loader;

pub use alerts::{AlertDef, builtin_alerts};
pub use defs::{DistrictDef, builtin_districts};

#[cfg(test)]
#[path = "../../tests/src_inline/districts/tests.rs"]
mod tests;
