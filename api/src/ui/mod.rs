pub mod render;
pub mod variant;
