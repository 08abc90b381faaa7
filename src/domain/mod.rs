// Domain layer: benchmark records, the per-algorithm grouping and the ports the pipeline runs against.

pub mod model;
pub mod ports;
