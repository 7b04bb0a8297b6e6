pub mod components;
pub mod layout;
pub mod line_input;
pub mod plain_text;
pub mod theme;
