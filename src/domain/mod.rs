// Domain layer: activity models, the seed set, and the store port.

pub mod model;
pub mod ports;
pub mod seed;
