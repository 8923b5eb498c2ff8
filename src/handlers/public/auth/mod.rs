// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition endpoints that do not require authentication.

pub mod login; // POST /api/auth/login - verify credentials and issue a token
pub mod register; // POST /api/auth/register - create a new account

pub use login::login_post;
pub use register::register_post;
