pub mod dimacs;
pub mod solver;
