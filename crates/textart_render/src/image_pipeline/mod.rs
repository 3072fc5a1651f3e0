pub mod loader;
pub mod sampler;
