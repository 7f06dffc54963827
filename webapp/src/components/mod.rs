pub mod footer;
pub mod icons;
pub mod mobile_menu;
pub mod navigation;
pub mod project_card;
