pub mod entities;
pub mod errors;
pub mod ports;
pub mod value_objects;

pub use entities::Company;
pub use errors::{CompanyError, ValidationError};
pub use ports::CompanyRepository;
pub use value_objects::CompanyName;
