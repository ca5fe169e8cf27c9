//! Command implementations.

pub mod build;
pub mod clean;

pub use self::build::execute_build;
pub use self::clean::execute_clean;
