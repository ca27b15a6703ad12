pub mod main_menu;
pub mod menu;

pub use main_menu::show_main_menu;
