pub mod faculty;
pub mod major;
pub mod university;
pub mod user;

pub use faculty::{Faculty, FacultySummary, UniversityFaculty};
pub use major::{Major, MajorName};
pub use university::{University, UniversityRow};
pub use user::User;
