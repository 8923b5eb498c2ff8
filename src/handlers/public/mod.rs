// handlers/public/mod.rs - Public handlers (no authentication)

pub mod auth; // Register and login
pub mod system; // Service info, health and liveness

pub use auth::*;
pub use system::*;
