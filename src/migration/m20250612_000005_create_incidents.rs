//! Migration: Create incidents table.

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
                CREATE TABLE incidents (
                    id SERIAL PRIMARY KEY,
                    title VARCHAR(255) NOT NULL,
                    incident_type VARCHAR(100),
                    severity VARCHAR(20) NOT NULL
                        CHECK (severity IN ('low', 'medium', 'high', 'critical')),
                    status VARCHAR(20) NOT NULL DEFAULT 'pending'
                        CHECK (status IN ('pending', 'investigasi', 'selesai')),
                    location VARCHAR(255),
                    incident_date DATE,
                    incident_time TIME,
                    description TEXT,
                    reporter_name VARCHAR(255),
                    witnesses TEXT,
                    immediate_action TEXT,
                    reported_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    completed_at TIMESTAMPTZ,
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_incidents_reported_at
                    ON incidents(reported_at);

                CREATE INDEX idx_incidents_status
                    ON incidents(status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS incidents CASCADE;")
            .await?;

        Ok(())
    }
}
