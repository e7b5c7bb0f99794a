// Domain layer: line-level models and the ports the engine is wired through.

pub mod model;
pub mod ports;
