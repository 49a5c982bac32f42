pub mod classifier;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use classifier::classify;
pub use ports::*;
pub use value_objects::*;
