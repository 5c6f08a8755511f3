//! DTO modules that bridge the wire contract, services, and templates.

pub mod catalog;
pub mod products;
