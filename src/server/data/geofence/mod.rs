pub mod center;
pub mod route;
pub mod zone;
