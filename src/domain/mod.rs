// Domain layer: response shapes and collaborator ports. No HTTP details here.

pub mod model;
pub mod ports;
