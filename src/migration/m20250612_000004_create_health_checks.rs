//! Migration: Create health_checks table.
//!
//! Vitals are nullable NUMERIC-family columns; NULL means "not measured"
//! and must never be written as zero.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE health_checks (
                    id SERIAL PRIMARY KEY,
                    employee_name VARCHAR(255) NOT NULL,
                    heart_rate INTEGER,
                    blood_pressure_systolic INTEGER,
                    blood_pressure_diastolic INTEGER,
                    temperature DOUBLE PRECISION,
                    spo2 INTEGER,
                    weight DOUBLE PRECISION,
                    blood_sugar DOUBLE PRECISION,
                    cholesterol DOUBLE PRECISION,
                    measured_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    notes TEXT,
                    signature_data TEXT
                );

                CREATE INDEX idx_health_checks_measured_at
                    ON health_checks(measured_at);

                CREATE INDEX idx_health_checks_employee
                    ON health_checks(employee_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS health_checks CASCADE;")
            .await?;

        Ok(())
    }
}
