pub mod export;
pub mod extract;
pub mod generate;
pub mod subjects;
