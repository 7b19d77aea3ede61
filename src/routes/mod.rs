pub mod attendance;

pub mod auth;

pub mod faculty;

pub mod frontend;

pub mod students;

pub mod system;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use faculty::configure_faculty_routes;
pub use frontend::configure_frontend_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
