pub mod preload;

pub use preload::PreloadJob;
