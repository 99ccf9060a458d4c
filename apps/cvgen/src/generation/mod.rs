// Generation pipeline: one record in, a dated run directory of artifacts out.

pub mod generator;

pub use generator::{generate, GenerateOptions};
