pub mod extract;
pub mod generation;
pub mod remote;
