pub mod canvas;
pub mod filter_bar;
pub mod keyword_network;
pub mod palette;
pub mod word_cloud;
