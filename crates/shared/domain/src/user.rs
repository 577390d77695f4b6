//! User and employee domain entities and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_DOCTOR, ROLE_EMPLOYEE, ROLE_NURSE};
use crate::cuil::Cuil;
use crate::password::Password;

/// Employee role discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Doctor,
    Nurse,
    /// Generic employee, used for any role that is not recognized
    Employee,
}

impl EmployeeRole {
    /// Canonical role name
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Doctor => ROLE_DOCTOR,
            EmployeeRole::Nurse => ROLE_NURSE,
            EmployeeRole::Employee => ROLE_EMPLOYEE,
        }
    }
}

impl From<&str> for EmployeeRole {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "doctor" => EmployeeRole::Doctor,
            "nurse" => EmployeeRole::Nurse,
            // Unknown roles register as a generic employee
            _ => EmployeeRole::Employee,
        }
    }
}

impl From<String> for EmployeeRole {
    fn from(s: String) -> Self {
        EmployeeRole::from(s.as_str())
    }
}

impl From<EmployeeRole> for String {
    fn from(role: EmployeeRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee profile shared by every role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub cuil: Cuil,
    pub email: String,
    pub phone_number: String,
    /// Professional licence (registration) number
    pub licence: String,
    pub role: EmployeeRole,
}

/// User account: login credential bound to an employee profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: Password,
    pub employee: Employee,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user for an employee
    pub fn new(email: String, password: Password, employee: Employee) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password,
            employee,
            created_at: Utc::now(),
        }
    }

    /// Role of the employee behind this account
    pub fn role(&self) -> EmployeeRole {
        self.employee.role
    }
}

/// Registration data transfer object.
///
/// Every field is optional at the wire level so that the auth service can
/// report which one is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterUser {
    /// Login email address
    pub email: Option<String>,
    /// Plain text password
    pub password: Option<String>,
    /// Must equal `password`
    pub confirm_password: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    /// National ID, formatted `DD-DDDDDDDD-D`
    pub cuil: Option<String>,
    /// Professional licence number
    pub licence: Option<String>,
    pub phone_number: Option<String>,
    /// "Doctor", "Nurse" or any other value for a generic employee
    pub employee_type: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Login email address
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub cuil: String,
    pub licence: String,
    pub phone_number: String,
    /// Role discriminator: "Doctor", "Nurse" or "Employee"
    pub employee_type: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.employee.name.clone(),
            last_name: user.employee.last_name.clone(),
            cuil: user.employee.cuil.to_string(),
            licence: user.employee.licence.clone(),
            phone_number: user.employee.phone_number.clone(),
            employee_type: user.employee.role.to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}
