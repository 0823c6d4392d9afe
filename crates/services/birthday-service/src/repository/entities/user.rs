//! User birthday entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::BirthRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub date_of_birth: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for BirthRecord {
    fn from(model: Model) -> Self {
        BirthRecord {
            username: model.username,
            date_of_birth: model.date_of_birth,
        }
    }
}
