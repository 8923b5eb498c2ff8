// handlers/mod.rs - Handler tiers
//
// Public (no auth) → Protected (bearer token required)
pub mod public; // Token acquisition, liveness and service info
pub mod protected; // Users, universities, faculties and majors
pub mod utils; // Request field helpers shared by both tiers
