pub mod delete_dialog;
pub mod delete_flow;
pub mod fetch_state;
pub mod relative_time;
pub mod url;

pub use relative_time::{format_relative, format_relative_now};
