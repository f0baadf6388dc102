// Domain layer: import records, backend result shapes and ports.

pub mod model;
pub mod ports;
