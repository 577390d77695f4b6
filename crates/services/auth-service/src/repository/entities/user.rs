//! User account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::employee;
use common::AppResult;
use domain::{Password, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub employee_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Join an account row with its employee row into a domain user
    pub fn into_domain(self, employee: employee::Model) -> AppResult<User> {
        Ok(User {
            id: self.id,
            email: self.email,
            password: Password::from_hash(self.password_hash),
            employee: employee.into_domain()?,
            created_at: self.created_at,
        })
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password.as_str().to_string()),
            employee_id: Set(user.employee.id),
            created_at: Set(user.created_at),
        }
    }
}
