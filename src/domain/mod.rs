// Domain layer: the candidate type and the primality port. No external dependencies.

pub mod model;
pub mod ports;
