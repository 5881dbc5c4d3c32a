pub mod allocation;
pub mod booking;
pub mod catalog;
