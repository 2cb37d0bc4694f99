pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{House, HouseDetails, HouseNeighbours};
pub use errors::HouseError;
pub use ports::HouseRepository;
pub use services::HouseService;
pub use value_objects::{HouseIdentifier, Rate, ValueObjectError};
