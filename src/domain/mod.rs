// Domain layer: manifest records, naming values and the config port.

pub mod model;
pub mod ports;
