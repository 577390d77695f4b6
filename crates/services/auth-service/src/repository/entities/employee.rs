//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::{AppError, AppResult};
use domain::{Cuil, Employee, EmployeeRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub cuil: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    pub licence: String,
    /// Canonical role name ("Doctor", "Nurse" or "Employee")
    pub employee_type: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user::Entity")]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert database model to domain entity
    pub fn into_domain(self) -> AppResult<Employee> {
        let cuil = Cuil::new(&self.cuil).map_err(|e| {
            AppError::internal(format!("Employee {} has a corrupt CUIL: {}", self.id, e))
        })?;

        Ok(Employee {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            cuil,
            email: self.email,
            phone_number: self.phone_number,
            licence: self.licence,
            role: EmployeeRole::from(self.employee_type.as_str()),
        })
    }
}

impl ActiveModel {
    /// Build an insertable row from a domain employee
    pub fn from_domain(employee: &Employee, created_at: DateTimeUtc) -> Self {
        Self {
            id: Set(employee.id),
            name: Set(employee.name.clone()),
            last_name: Set(employee.last_name.clone()),
            cuil: Set(employee.cuil.to_string()),
            email: Set(employee.email.clone()),
            phone_number: Set(employee.phone_number.clone()),
            licence: Set(employee.licence.clone()),
            employee_type: Set(employee.role.to_string()),
            created_at: Set(created_at),
        }
    }
}
