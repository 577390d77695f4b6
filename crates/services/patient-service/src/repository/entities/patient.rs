//! Patient database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::AppError;
use domain::{Address, Affiliation, Cuil, Patient};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub cuil: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub number: i32,
    pub locality: String,
    /// Set together with `affiliate_number`, or not at all
    pub social_work: Option<String>,
    pub affiliate_number: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Patient {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let cuil = Cuil::new(&model.cuil).map_err(|e| {
            AppError::internal(format!("Patient {} has a corrupt CUIL: {}", model.id, e))
        })?;

        let affiliation = match (model.social_work, model.affiliate_number) {
            (Some(social_work), Some(number)) => Some(Affiliation::new(social_work, number)),
            _ => None,
        };

        Ok(Patient {
            id: model.id,
            cuil,
            name: model.name,
            last_name: model.last_name,
            email: model.email,
            address: Address {
                street: model.street,
                number: model.number,
                locality: model.locality,
            },
            affiliation,
            created_at: model.created_at,
        })
    }
}

impl From<&Patient> for ActiveModel {
    fn from(patient: &Patient) -> Self {
        let affiliation = patient.affiliation.as_ref();
        Self {
            id: Set(patient.id),
            cuil: Set(patient.cuil.to_string()),
            name: Set(patient.name.clone()),
            last_name: Set(patient.last_name.clone()),
            email: Set(patient.email.clone()),
            street: Set(patient.address.street.clone()),
            number: Set(patient.address.number),
            locality: Set(patient.address.locality.clone()),
            social_work: Set(affiliation.map(|a| a.social_work().to_string())),
            affiliate_number: Set(affiliation.map(|a| a.affiliate_number().to_string())),
            created_at: Set(patient.created_at),
        }
    }
}
