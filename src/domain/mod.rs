// Domain layer: registry records, report snapshots and ports (interfaces).

pub mod model;
pub mod ports;
pub mod report;
