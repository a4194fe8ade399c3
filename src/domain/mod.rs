// Domain layer: wire models and the server port. No HTTP details beyond the raw response type.

pub mod model;
pub mod ports;
