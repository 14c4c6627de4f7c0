pub mod admission;
pub mod auth;
pub mod availability;
