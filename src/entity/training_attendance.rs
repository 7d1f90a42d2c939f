//! Training attendance entity for SeaORM.
//!
//! Append-only sign-in ledger. `participant_name` is free text matched
//! against `employees.name`; repeat sign-ins for the same training are
//! allowed and deduplicated at read time where headcounts matter.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "training_attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub training_id: i32,
    pub participant_name: String,
    pub timestamp: DateTimeUtc,
    pub notes: Option<String>,
    pub signature_data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training::Entity",
        from = "Column::TrainingId",
        to = "super::training::Column::Id"
    )]
    Training,
}

impl Related<super::training::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Training.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
