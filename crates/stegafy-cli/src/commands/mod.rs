pub mod hide;
pub mod hide_image;
pub mod unveil;
