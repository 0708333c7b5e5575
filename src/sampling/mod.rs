//! Probability-distribution sampling for the booking synthesizer

pub mod sampler;

pub use sampler::SlotSampler;
