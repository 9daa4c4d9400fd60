// Service module exports

pub mod conversion;
pub mod settings;
