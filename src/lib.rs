pub mod batch;
pub mod cli;
pub mod core;
pub mod cropping;
pub mod file_scanner;
pub mod image_loader;

pub use crate::batch::BatchProcessor;
pub use crate::core::{BatchSummary, CropConfig, CropperError, CropperResult};
