// Domain layer: wire data model, enumerated codes and the layout port.

pub mod codes;
pub mod model;
pub mod ports;
