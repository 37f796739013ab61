pub mod colors;
pub mod menu_bar;
pub mod slider;
pub mod status;
pub mod viewport;
