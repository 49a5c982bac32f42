pub mod services;
pub mod value_objects;

pub use services::advise;
pub use value_objects::format_quantity;
