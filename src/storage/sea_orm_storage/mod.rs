//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod classes;
mod student_assignments;
mod students;

use crate::config::DatabaseConfig;
use crate::errors::{ClassroomError, Result};
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
    /// 按配置连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    ///
    /// 内存数据库每个连接都是独立的库，因此固定为单连接且不回收。
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool_options = SqlitePoolOptions::new()
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.timeout));

        let pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(config.pool_size)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 内存 SQLite，供测试使用
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
    }
}

/// 生成新的主键
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentDetail, Grade, StudentAssignment, StudentAssignmentDetail},
        requests::{AssignStudentDto, CreateAssignmentDto},
    },
    classes::{
        entities::{Class, Enrollment},
        requests::{CreateClassDto, EnrollStudentDto},
    },
    students::{
        entities::{Student, StudentDetail},
        requests::CreateStudentDto,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentDto) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn list_students(&self) -> Result<Vec<StudentDetail>> {
        self.list_students_impl().await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_detail(&self, id: &str) -> Result<Option<StudentDetail>> {
        self.get_student_detail_impl(id).await
    }

    async fn list_student_submitted_assignments(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentAssignmentDetail>> {
        self.list_student_assignments_impl(student_id, false).await
    }

    async fn list_student_grades(&self, student_id: &str) -> Result<Vec<StudentAssignmentDetail>> {
        self.list_student_assignments_impl(student_id, true).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassDto) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: &str) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn list_class_assignments(&self, class_id: &str) -> Result<Vec<AssignmentDetail>> {
        self.list_class_assignments_impl(class_id).await
    }

    async fn get_enrollment(
        &self,
        student_id: &str,
        class_id: &str,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, class_id).await
    }

    async fn create_enrollment(&self, enrollment: EnrollStudentDto) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentDto) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn get_assignment_detail(&self, id: &str) -> Result<Option<AssignmentDetail>> {
        self.get_assignment_detail_impl(id).await
    }

    // 学生作业模块
    async fn create_student_assignment(
        &self,
        assign: AssignStudentDto,
    ) -> Result<StudentAssignment> {
        self.create_student_assignment_impl(assign).await
    }

    async fn submit_student_assignment(&self, id: &str) -> Result<Option<StudentAssignment>> {
        self.submit_student_assignment_impl(id).await
    }

    async fn grade_student_assignment(
        &self,
        id: &str,
        grade: Grade,
    ) -> Result<Option<StudentAssignment>> {
        self.grade_student_assignment_impl(id, grade).await
    }
}
