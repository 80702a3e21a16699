pub mod announcement;
pub mod announcement_form;
pub mod announcements;
