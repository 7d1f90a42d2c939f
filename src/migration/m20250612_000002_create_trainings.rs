//! Migration: Create trainings table.

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
                CREATE TABLE trainings (
                    id SERIAL PRIMARY KEY,
                    title VARCHAR(255) NOT NULL,
                    trainer VARCHAR(255) NOT NULL,
                    start_time TIMESTAMPTZ NOT NULL,
                    duration_hours DOUBLE PRECISION NOT NULL,
                    documentation_url VARCHAR(500),

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_trainings_start_time
                    ON trainings(start_time);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS trainings CASCADE;")
            .await?;

        Ok(())
    }
}
