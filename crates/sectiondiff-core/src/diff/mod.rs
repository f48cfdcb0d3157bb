//! Sectioned snapshot diff: changeset model and computation engine

pub mod engine;
pub mod model;
