pub mod cli;
pub mod runner;
pub mod shapes;
