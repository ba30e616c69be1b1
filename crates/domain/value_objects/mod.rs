pub mod flag;
pub mod places;
pub mod presence;
pub mod text_list;
