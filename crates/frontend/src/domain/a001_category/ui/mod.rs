pub mod category_form;
pub mod category_table;
pub mod edit_overlay;
pub mod page;

pub use page::CategoryManager;
