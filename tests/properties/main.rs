//! Cross-crate behavioral properties
//!
//! Each test pins one observable guarantee of the store or the table engine,
//! exercised through the public facade the way an application would use it.

mod store_props;
mod table_props;
