pub mod session;
pub mod users;

// Re-export handler functions for use in routing
pub use session::change_password as session_change_password;
pub use session::logout as session_logout;
pub use users::delete as user_delete;
pub use users::list as user_list;
