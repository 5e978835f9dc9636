pub mod content_loader;

pub use content_loader::{load_content_dir, load_dataset_file};
