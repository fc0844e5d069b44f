pub mod letter;
pub mod sampler;
