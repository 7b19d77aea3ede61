pub mod attendance;
pub mod auth;
pub mod faculty;
pub mod students;
pub mod system;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use faculty::FacultyService;
pub use students::StudentService;
pub use system::SystemService;
