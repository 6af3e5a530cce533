pub mod hotel;

pub use hotel::{Hotel, Review};
