pub mod field_layout;
pub mod garden;
pub mod render_settings;
