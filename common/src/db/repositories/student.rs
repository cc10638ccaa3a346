// Student repository implementation

use crate::db::DbConnector;
use crate::errors::DatabaseError;
use crate::models::{NewStudent, Student};
use sqlx::Connection;
use tracing::instrument;

/// Repository for student-related database operations
///
/// Every method runs one acquire → execute → finalize → release cycle on a
/// fresh connection. Dropping the connection releases it on all paths;
/// dropping an uncommitted transaction rolls it back.
pub struct StudentRepository {
    connector: DbConnector,
}

impl StudentRepository {
    /// Create a new StudentRepository
    pub fn new(connector: DbConnector) -> Self {
        Self { connector }
    }

    /// Create the `students` table if it does not already exist
    ///
    /// Idempotent: a second invocation is a no-op on the schema.
    #[instrument(skip(self))]
    pub async fn create_table(&self) -> Result<(), DatabaseError> {
        let mut conn = self.connector.connect().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id SERIAL PRIMARY KEY,
                fname VARCHAR(100) NOT NULL,
                lname VARCHAR(100) NOT NULL,
                nickname VARCHAR(50),
                phone VARCHAR(20),
                image_url TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create students table");
            DatabaseError::QueryFailed(e.to_string())
        })?;

        conn.close().await.ok();
        tracing::info!("Students table ready");
        Ok(())
    }

    /// Fetch all students ordered by first name
    ///
    /// Ties on `fname` are returned in storage order, which is unspecified.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Student>, DatabaseError> {
        let mut conn = self.connector.connect().await?;

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, fname, lname, nickname, phone, image_url
            FROM students
            ORDER BY fname
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list students");
            DatabaseError::QueryFailed(e.to_string())
        })?;

        conn.close().await.ok();
        tracing::debug!(count = students.len(), "Fetched students");
        Ok(students)
    }

    /// Insert one student and return the generated id
    ///
    /// The insert runs inside a transaction: any statement failure rolls the
    /// transaction back before the error is reported, leaving no partial row.
    #[instrument(skip(self, new_student))]
    pub async fn insert(&self, new_student: &NewStudent) -> Result<i32, DatabaseError> {
        let mut conn = self.connector.connect().await?;

        let mut tx = conn.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin transaction");
            DatabaseError::TransactionFailed(e.to_string())
        })?;

        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO students (fname, lname, nickname, phone, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new_student.fname)
        .bind(&new_student.lname)
        .bind(&new_student.nickname)
        .bind(&new_student.phone)
        .bind(&new_student.image_url)
        .fetch_one(&mut *tx)
        .await;

        let new_id = match result {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "Failed to insert student");
                // Explicit rollback; dropping the transaction would do the same
                tx.rollback().await.ok();
                return Err(DatabaseError::QueryFailed(e.to_string()));
            }
        };

        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to commit student insert");
            DatabaseError::TransactionFailed(e.to_string())
        })?;

        conn.close().await.ok();
        tracing::info!(student_id = new_id, "Student inserted");
        Ok(new_id)
    }
}
