pub mod application;
pub mod planets;
