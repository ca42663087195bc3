pub mod analysis;
pub mod config;
pub mod predictor;
pub mod ranking;
pub mod sampler;
