// Domain layer: request/artifact models and the ports the producer depends on.

pub mod model;
pub mod ports;
