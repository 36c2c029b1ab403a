// Domain layer: program/institution models, listing filters and ports.

pub mod filter;
pub mod model;
pub mod ports;
