pub mod example_popup;
pub mod header_bar;
pub mod pager_bar;
pub mod search_box;
pub mod vocab_table;
