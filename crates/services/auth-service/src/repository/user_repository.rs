//! User repository: accounts and the employee profiles they log in as.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use tracing::warn;

use super::entities::employee::{self, Entity as EmployeeEntity};
use super::entities::user::{self, Entity as UserEntity};
use common::{is_unique_violation, AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a user together with its employee profile.
    ///
    /// Returns `Ok(None)` when the record could not be stored because the
    /// email is already taken.
    async fn create(&self, user: User) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert the employee row and its account row atomically.
    async fn insert_records(&self, account: &User) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        employee::ActiveModel::from_domain(&account.employee, account.created_at)
            .insert(&txn)
            .await?;
        user::ActiveModel::from(account).insert(&txn).await?;

        txn.commit().await
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .find_also_related(EmployeeEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match result {
            Some((account, Some(profile))) => account.into_domain(profile).map(Some),
            Some((account, None)) => Err(AppError::internal(format!(
                "User {} has no employee profile",
                account.id
            ))),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> AppResult<Option<User>> {
        match self.insert_records(&user).await {
            Ok(()) => Ok(Some(user)),
            Err(err) if is_unique_violation(&err) => {
                warn!(user_id = %user.id, "User not stored: email already registered");
                Ok(None)
            }
            Err(err) => Err(AppError::from(err)),
        }
    }
}
