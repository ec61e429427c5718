pub mod careers;
pub mod editorials;
pub mod financial;
pub mod home;
pub mod ships;
