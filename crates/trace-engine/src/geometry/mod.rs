pub mod generate;
pub mod instruction;
pub mod mapper;
