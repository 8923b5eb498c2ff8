pub mod faculty_service;
pub mod major_service;
pub mod university_service;
pub mod user_service;

pub use faculty_service::FacultyService;
pub use major_service::MajorService;
pub use university_service::UniversityService;
pub use user_service::{NewUser, UserService};
