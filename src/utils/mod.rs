pub mod outside_click;

pub use outside_click::create_outside_click_listener;
