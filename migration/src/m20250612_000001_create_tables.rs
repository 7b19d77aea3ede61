use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::RollNo)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::FatherName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::StudentClass).string().not_null())
                    .col(ColumnDef::new(Students::Address).text().not_null())
                    .col(ColumnDef::new(Students::Age).integer().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表（含嵌入式考勤记录数组）
        manager
            .create_table(
                Table::create()
                    .table(Faculty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculty::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculty::Name).string().not_null())
                    .col(ColumnDef::new(Faculty::Phone).string().not_null())
                    .col(ColumnDef::new(Faculty::Email).string().not_null())
                    .col(ColumnDef::new(Faculty::Education).string().not_null())
                    .col(ColumnDef::new(Faculty::University).string().not_null())
                    .col(ColumnDef::new(Faculty::Address).text().not_null())
                    .col(ColumnDef::new(Faculty::Specialization).string().not_null())
                    .col(ColumnDef::new(Faculty::AssignedClass).integer().not_null())
                    .col(ColumnDef::new(Faculty::AssignedSubject).string().not_null())
                    .col(ColumnDef::new(Faculty::ScheduleDays).string().not_null())
                    .col(ColumnDef::new(Faculty::ScheduleTime).string().not_null())
                    .col(
                        ColumnDef::new(Faculty::AttendanceRecords)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Faculty::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建独立考勤记录表（与嵌入式数组并存，便于全局查询）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::FacultyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Date).string().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Students)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::FacultyId)
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 按教师查询考勤是最常见的访问路径
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_records_faculty_id")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::FacultyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculty::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    RollNo,
    Name,
    FatherName,
    Email,
    StudentClass,
    Address,
    Age,
    Gender,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Faculty {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Education,
    University,
    Address,
    Specialization,
    AssignedClass,
    AssignedSubject,
    ScheduleDays,
    ScheduleTime,
    AttendanceRecords,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    FacultyId,
    FacultyName,
    Date,
    Students,
    CreatedAt,
}
