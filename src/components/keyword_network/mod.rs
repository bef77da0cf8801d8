mod component;
mod graph;
mod layout;
mod render;
mod state;
mod types;

pub use component::KeywordNetworkCanvas;
