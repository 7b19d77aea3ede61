pub mod attendance;
pub mod auth;
pub mod common;
pub mod faculty;
pub mod students;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于统计运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 通用错误；2xxx 认证/用户；3xxx 学生；
/// 4xxx 教师；5xxx 考勤。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1001,
    Unauthorized = 1002,
    NotFound = 1004,
    InternalServerError = 1005,
    RateLimitExceeded = 1006,

    // 认证 / 用户
    AuthFailed = 2001,
    RegisterFailed = 2002,
    UserNameInvalid = 2003,
    UserEmailInvalid = 2004,
    UserPasswordInvalid = 2005,
    UserNameAlreadyExists = 2006,
    UserEmailAlreadyExists = 2007,
    UserNotFound = 2008,

    // 学生
    StudentCreationFailed = 3001,
    StudentNotFound = 3002,
    StudentDeleteFailed = 3003,
    RollNoNotFound = 3004,
    RollNoInvalid = 3005,

    // 教师
    FacultyCreationFailed = 4001,
    FacultyNotFound = 4002,
    FacultyDeleteFailed = 4003,

    // 考勤
    AttendanceSubmitFailed = 5001,
    AttendanceRecordNotFound = 5002,
    AttendanceDeleteFailed = 5003,
    AttendanceSessionEmpty = 5004,
    AttendanceSessionNotStarted = 5005,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1002);
        assert_eq!(ErrorCode::RollNoNotFound as i32, 3004);
        assert_eq!(ErrorCode::AttendanceSessionEmpty as i32, 5004);
    }
}
