// Domain layer: core models and ports (interfaces). No external dependencies beyond
// serde/chrono and the stream types the ports hand out.

pub mod model;
pub mod ports;
