//! Test harness for Folio integration tests.
//!
//! Provides a [`TestBuilder`] that starts a mock catalog server and registers the endpoints a
//! test expects to be called, plus JSON factories for catalog records.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use mockito;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
