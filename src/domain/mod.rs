// Domain layer: task model and ports (interfaces) to the spreadsheet and chat services.

pub mod model;
pub mod ports;
