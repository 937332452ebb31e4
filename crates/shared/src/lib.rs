//! Catalog domain types shared between the client and the fixture service.

pub mod domain;
pub mod error;
pub mod protocol;
