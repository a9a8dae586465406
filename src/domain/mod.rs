// Domain layer: the page's data and the ports the browser side is reached through.

pub mod model;
pub mod ports;
