pub mod adaptive;
pub mod chart;
pub mod faithful;
pub mod outline;
pub mod strategy;
pub mod surface;
pub mod text;
