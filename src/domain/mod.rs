// Domain layer: payload models and ports. No HTTP or UI dependencies here.

pub mod model;
pub mod ports;
