//! Server application core modules.
//!
//! This module contains the server-side functionality of Folio: configuration, the remote
//! catalog client, the cascading deletion services, and the HTTP controllers exposing them.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
