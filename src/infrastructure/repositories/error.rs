use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports constraint failures as "UNIQUE constraint failed: <table>.<column>".
const COL_USERNAME: &str = "users.username";
const COL_AUTHOR_USER: &str = "author_profiles.user_id";
const SLUG_COLUMNS: [&str; 3] = ["categories.slug", "articles.slug", "images.slug"];

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if let Some(column) = SLUG_COLUMNS.iter().find(|col| message.contains(*col)) {
                        return DomainError::SlugTaken((*column).to_string());
                    }
                    if message.contains(COL_USERNAME) {
                        return DomainError::Conflict("username already exists".into());
                    }
                    if message.contains(COL_AUTHOR_USER) {
                        return DomainError::Conflict("user already has an author profile".into());
                    }
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    DomainError::Validation(message.to_string())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
