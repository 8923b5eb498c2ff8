// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route here sits behind `jwt_auth_middleware`, which injects the
// caller's `AuthUser` extension.

pub mod auth; // Users, password change and logout
pub mod faculties;
pub mod majors;
pub mod universities;

