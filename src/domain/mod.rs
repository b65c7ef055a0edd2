// Domain layer: analysis models and ports (interfaces).

pub mod model;
pub mod ports;
