pub mod appointment;
pub mod booking;
pub mod doctor;
pub mod object_id;
pub mod outcome;
pub mod post;
pub mod user;
