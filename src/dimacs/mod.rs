/// DIMACS CNF input
pub mod parser;
pub mod sat_instance;
