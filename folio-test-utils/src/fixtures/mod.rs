pub mod catalog;
pub mod factory;
