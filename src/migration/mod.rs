//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_employees;
mod m20250612_000002_create_trainings;
mod m20250612_000003_create_training_attendance;
mod m20250612_000004_create_health_checks;
mod m20250612_000005_create_incidents;
mod m20250612_000006_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_employees::Migration),
            Box::new(m20250612_000002_create_trainings::Migration),
            Box::new(m20250612_000003_create_training_attendance::Migration),
            Box::new(m20250612_000004_create_health_checks::Migration),
            Box::new(m20250612_000005_create_incidents::Migration),
            Box::new(m20250612_000006_create_users::Migration),
        ]
    }
}
