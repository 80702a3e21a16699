pub mod alert;
pub mod announcement_card;
pub mod button;
pub mod card;
pub mod delete_announcement_dialog;
pub mod entity_peek;
pub mod loading;
pub mod markdown;
pub mod modal;
pub mod page_header;
