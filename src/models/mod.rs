pub mod movie;
pub mod seat;
pub mod theater;

pub use movie::Movie;
pub use seat::Seat;
pub use theater::{SeatBank, Theater};
