pub mod catalog;
pub mod models;
pub mod sort;
pub mod thumbnail;
pub mod view;
