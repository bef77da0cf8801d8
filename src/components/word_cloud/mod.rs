mod component;
mod layout;
mod render;
mod state;
mod types;

pub use component::WordCloudCanvas;
