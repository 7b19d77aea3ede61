use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数（用于启动时判断是否需要初始化账号）
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生，学号由服务层按「起始学号 + 当前学生数」算好传入
    async fn create_student(&self, student: CreateStudentRequest, roll_no: i64) -> Result<Student>;
    // 通过学号获取学生（花名册查找）
    async fn get_student_by_roll_no(&self, roll_no: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 统计学生数
    async fn count_students(&self) -> Result<u64>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师，班级/科目/时间表由分配策略算好传入
    async fn create_faculty(
        &self,
        faculty: CreateFacultyRequest,
        assignment: TeachingAssignment,
    ) -> Result<Faculty>;
    // 通过ID获取教师信息（含嵌入式考勤记录）
    async fn get_faculty_by_id(&self, faculty_id: i64) -> Result<Option<Faculty>>;
    // 列出教师
    async fn list_faculty_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse>;
    // 删除教师（嵌入式记录随行删除，独立记录按外键级联）
    async fn delete_faculty(&self, faculty_id: i64) -> Result<bool>;

    /// 考勤双存储方法
    // 向教师文档的嵌入式数组追加记录；数组中已有完全相同的元素时
    // 不做任何修改（arrayUnion 语义），返回是否发生了追加
    async fn append_faculty_attendance(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool>;
    // append_faculty_attendance 的逆操作：移除一个完全相同的元素，
    // 用于双写后半段失败时的补偿删除
    async fn retract_faculty_attendance(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool>;
    // 读取教师文档的嵌入式记录
    async fn list_embedded_attendance(&self, faculty_id: i64) -> Result<Vec<AttendanceRecord>>;
    // 按 (faculty_id, date) 从嵌入式数组移除记录，返回是否有改动
    async fn remove_embedded_attendance(&self, faculty_id: i64, date: &str) -> Result<bool>;
    // 向独立 attendance 集合插入记录，返回带 id 的副本
    async fn insert_attendance_record(&self, record: &AttendanceRecord)
    -> Result<AttendanceRecord>;
    // 按教师查询独立集合
    async fn list_attendance_by_faculty(&self, faculty_id: i64) -> Result<Vec<AttendanceRecord>>;
    // 按 id 删除独立集合中的记录
    async fn delete_attendance_record(&self, record_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
