//! Contains the types and functions for the high level pipeline builder API.

mod image_pipeline;
mod operation;

pub use image_pipeline::ImagePipeline;
pub use operation::Operation;
