//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod faculty;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{AttendanceSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                AttendanceSystemError::database_config(format!("SQLite URL 解析失败: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_connection(format!("SQLite 连接失败: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AttendanceSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AttendanceSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::entities::AttendanceRecord,
    faculty::{
        entities::{Faculty, TeachingAssignment},
        requests::{CreateFacultyRequest, FacultyListQuery},
        responses::FacultyListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::StudentListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest, roll_no: i64) -> Result<Student> {
        self.create_student_impl(student, roll_no).await
    }

    async fn get_student_by_roll_no(&self, roll_no: i64) -> Result<Option<Student>> {
        self.get_student_by_roll_no_impl(roll_no).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_faculty(
        &self,
        faculty: CreateFacultyRequest,
        assignment: TeachingAssignment,
    ) -> Result<Faculty> {
        self.create_faculty_impl(faculty, assignment).await
    }

    async fn get_faculty_by_id(&self, faculty_id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(faculty_id).await
    }

    async fn list_faculty_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        self.list_faculty_with_pagination_impl(query).await
    }

    async fn delete_faculty(&self, faculty_id: i64) -> Result<bool> {
        self.delete_faculty_impl(faculty_id).await
    }

    // 考勤模块
    async fn append_faculty_attendance(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool> {
        self.append_faculty_attendance_impl(faculty_id, record).await
    }

    async fn retract_faculty_attendance(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool> {
        self.retract_faculty_attendance_impl(faculty_id, record)
            .await
    }

    async fn list_embedded_attendance(&self, faculty_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_embedded_attendance_impl(faculty_id).await
    }

    async fn remove_embedded_attendance(&self, faculty_id: i64, date: &str) -> Result<bool> {
        self.remove_embedded_attendance_impl(faculty_id, date).await
    }

    async fn insert_attendance_record(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceRecord> {
        self.insert_attendance_record_impl(record).await
    }

    async fn list_attendance_by_faculty(&self, faculty_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_by_faculty_impl(faculty_id).await
    }

    async fn delete_attendance_record(&self, record_id: i64) -> Result<bool> {
        self.delete_attendance_record_impl(record_id).await
    }
}
