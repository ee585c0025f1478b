pub mod reading;
pub mod sign;
