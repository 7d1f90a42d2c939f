//! Migration: Create training_attendance table.
//!
//! `participant_name` intentionally carries no foreign key to employees —
//! history joins by string equality, so renames/deletes orphan old rows.

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
                CREATE TABLE training_attendance (
                    id SERIAL PRIMARY KEY,
                    training_id INTEGER NOT NULL REFERENCES trainings(id),
                    participant_name VARCHAR(255) NOT NULL,
                    timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    notes TEXT,
                    signature_data TEXT NOT NULL
                );

                CREATE INDEX idx_training_attendance_training_id
                    ON training_attendance(training_id);

                -- Attendance stats bucket by calendar date of "timestamp"
                CREATE INDEX idx_training_attendance_timestamp
                    ON training_attendance(timestamp);

                CREATE INDEX idx_training_attendance_participant
                    ON training_attendance(participant_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS training_attendance CASCADE;")
            .await?;

        Ok(())
    }
}
