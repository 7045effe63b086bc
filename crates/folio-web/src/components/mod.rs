//! Leptos UI components

mod footer;
mod header;
mod nav_menu;

pub use footer::Footer;
pub use header::Header;
pub use nav_menu::NavigationMenu;
