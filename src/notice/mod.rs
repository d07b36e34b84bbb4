//! The license resolution engine: domain model, resolution services and
//! matching policies for NOTICE generation.

pub mod domain;
pub mod policies;
pub mod services;
