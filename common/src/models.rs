use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The wire shape of one listed student: a positional tuple, serialized as a
/// JSON array rather than an object.
pub type StudentRow = (
    i32,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Student represents one person's record in the `students` table
///
/// The table also carries a server-generated `created_at` timestamp, which is
/// never selected or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

impl Student {
    /// Flatten into the positional listing tuple
    pub fn into_row(self) -> StudentRow {
        (
            self.id,
            self.fname,
            self.lname,
            self.nickname,
            self.phone,
            self.image_url,
        )
    }
}

/// Request body for registering a new student
///
/// Every field is optional at the deserialization boundary; presence of the
/// required names is checked in [`CreateStudentRequest::validate`] so a
/// missing field gets the same client error as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

impl CreateStudentRequest {
    /// Check required fields before any database interaction
    pub fn validate(self) -> Result<NewStudent, ValidationError> {
        let fname = self.fname.unwrap_or_default();
        let lname = self.lname.unwrap_or_default();
        if fname.trim().is_empty() || lname.trim().is_empty() {
            return Err(ValidationError::MissingRequiredNames);
        }

        Ok(NewStudent {
            fname,
            lname,
            nickname: self.nickname,
            phone: self.phone,
            image_url: self.image_url,
        })
    }
}

/// A validated insert payload: `fname` and `lname` are known to be non-empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub fname: String,
    pub lname: String,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}
