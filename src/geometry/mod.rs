pub mod grid;
pub mod region;
