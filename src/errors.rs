//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceSystemError {
            $($variant(String),)*
        }

        impl AttendanceSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AttendanceSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
}

impl AttendanceSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AttendanceSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AttendanceSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        AttendanceSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AttendanceSystemError {
    fn from(err: serde_json::Error) -> Self {
        AttendanceSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AttendanceSystemError {
    fn from(err: chrono::ParseError) -> Self {
        AttendanceSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AttendanceSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AttendanceSystemError::cache_connection("test").code(),
            "E001"
        );
        assert_eq!(AttendanceSystemError::database_config("test").code(), "E003");
        assert_eq!(AttendanceSystemError::validation("test").code(), "E006");
        assert_eq!(AttendanceSystemError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AttendanceSystemError::date_parse("test").error_type(),
            "Date Parse Error"
        );
        assert_eq!(
            AttendanceSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AttendanceSystemError::validation("Invalid roll number");
        assert_eq!(err.message(), "Invalid roll number");
    }

    #[test]
    fn test_format_simple() {
        let err = AttendanceSystemError::not_found("faculty 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("faculty 42"));
    }
}
