pub mod output_directory;
pub mod resized_image;
pub mod source_image;
pub mod target_width;

// --- public re-exports ---
pub use output_directory::{DirectoryError, OutputDirectory};
pub use resized_image::{OutputError, ResizedImage};
pub use source_image::{SourceImage, SourceImageError};
pub use target_width::{DimensionError, TargetWidth};
