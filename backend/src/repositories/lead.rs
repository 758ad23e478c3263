//! Lead repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Lead record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeadRecord {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a lead
#[derive(Debug, Clone)]
pub struct CreateLead {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

/// Lead repository for database operations
pub struct LeadRepository;

impl LeadRepository {
    /// Create a new lead entry. The error stays typed so the service layer
    /// maps storage failures to the database error envelope.
    pub async fn create(pool: &PgPool, input: CreateLead) -> Result<LeadRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, LeadRecord>(
            r#"
            INSERT INTO leads (id, name, phone, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.message)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
