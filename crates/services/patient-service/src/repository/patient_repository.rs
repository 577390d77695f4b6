//! Patient repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::warn;

use super::entities::patient::{self, ActiveModel, Entity as PatientEntity};
use common::{is_unique_violation, AppError, AppResult};
use domain::Patient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Patient repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find patients whose CUIL starts with `cuil`, ordered by CUIL
    async fn find_by_cuil(&self, cuil: &str) -> AppResult<Vec<Patient>>;

    /// Persist a new patient.
    ///
    /// Returns `Ok(None)` when the CUIL is already stored.
    async fn create(&self, patient: Patient) -> AppResult<Option<Patient>>;
}

/// Escape `LIKE` metacharacters so `prefix` only matches literally.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn cuil_starts_with(prefix: &str) -> SimpleExpr {
    Expr::col((PatientEntity, patient::Column::Cuil))
        .like(LikeExpr::new(like_prefix(prefix)).escape('\\'))
}

/// Concrete implementation of PatientRepository
pub struct PatientStore {
    db: DatabaseConnection,
}

impl PatientStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientRepository for PatientStore {
    async fn find_by_cuil(&self, cuil: &str) -> AppResult<Vec<Patient>> {
        let prefix = cuil.trim();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let models = PatientEntity::find()
            .filter(cuil_starts_with(prefix))
            .order_by_asc(patient::Column::Cuil)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(Patient::try_from).collect()
    }

    async fn create(&self, patient: Patient) -> AppResult<Option<Patient>> {
        match ActiveModel::from(&patient).insert(&self.db).await {
            Ok(_) => Ok(Some(patient)),
            Err(err) if is_unique_violation(&err) => {
                warn!(patient_id = %patient.id, "Patient not stored: CUIL already registered");
                Ok(None)
            }
            Err(err) => Err(AppError::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::testing::unique_violation;
    use domain::{Address, Affiliation, Cuil};
    use sea_orm::prelude::Uuid;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, QueryTrait, Value};

    fn row(cuil: &str) -> patient::Model {
        patient::Model {
            id: Uuid::new_v4(),
            cuil: cuil.to_string(),
            name: "Lautaro".to_string(),
            last_name: "Lopez".to_string(),
            email: "lautalopez@gmail.com".to_string(),
            street: "Avenue Nine Of July".to_string(),
            number: 356,
            locality: "CABA".to_string(),
            social_work: Some("OSDE".to_string()),
            affiliate_number: Some("123456".to_string()),
            created_at: Utc::now(),
        }
    }

    fn new_patient() -> Patient {
        Patient::new(
            Cuil::new("20-45750673-8").unwrap(),
            "Lautaro".to_string(),
            "Lopez".to_string(),
            "lautalopez@gmail.com".to_string(),
            Address {
                street: "Avenue Nine Of July".to_string(),
                number: 356,
                locality: "CABA".to_string(),
            },
            Some(Affiliation::new("OSDE", "123456")),
        )
    }

    #[test]
    fn test_like_prefix_escapes_wildcards() {
        assert_eq!(like_prefix("20-4575"), "20-4575%");
        assert_eq!(like_prefix("%"), "\\%%");
        assert_eq!(like_prefix("20_"), "20\\_%");
        assert_eq!(like_prefix("a\\b"), "a\\\\b%");
    }

    #[test]
    fn test_prefix_query_binds_escaped_pattern() {
        let statement = PatientEntity::find()
            .filter(cuil_starts_with("%"))
            .build(DatabaseBackend::Postgres);

        assert!(statement.sql.contains("LIKE $1 ESCAPE"));
        assert!(!statement.sql.contains("'%%'"));

        let values = statement.values.unwrap().0;
        assert_eq!(values, vec![Value::from("\\%%")]);
    }

    #[tokio::test]
    async fn test_find_by_cuil_blank_prefix_skips_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = PatientStore::new(db);

        assert!(store.find_by_cuil("   ").await.unwrap().is_empty());
        assert!(store.db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_cuil_converts_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("20-45750673-8"), row("20-45750674-6")]])
            .into_connection();
        let store = PatientStore::new(db);

        let patients = store.find_by_cuil(" 20-4575 ").await.unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].cuil.as_str(), "20-45750673-8");
        assert_eq!(patients[1].cuil.as_str(), "20-45750674-6");
        assert!(patients[0].is_affiliated());
        assert_eq!(store.db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_cuil_corrupt_row_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("garbage")]])
            .into_connection();

        let err = PatientStore::new(db).find_by_cuil("20").await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_create_returns_stored_patient() {
        let patient = new_patient();
        let mut stored = row("20-45750673-8");
        stored.id = patient.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .into_connection();

        let created = PatientStore::new(db).create(patient.clone()).await.unwrap();
        assert_eq!(created.map(|p| p.id), Some(patient.id));
    }

    #[tokio::test]
    async fn test_create_duplicate_cuil_is_soft_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([unique_violation()])
            .into_connection();

        let created = PatientStore::new(db).create(new_patient()).await.unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_create_other_database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = PatientStore::new(db).create(new_patient()).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
