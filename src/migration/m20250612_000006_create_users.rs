//! Migration: Create users table.
//!
//! Stores dashboard login accounts. Plaintext passwords are a carry-over
//! from the system this backend replaces; the seeded values are development
//! credentials only.

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
                CREATE TABLE users (
                    username VARCHAR(100) PRIMARY KEY,
                    password VARCHAR(255) NOT NULL,
                    role VARCHAR(50) NOT NULL,
                    name VARCHAR(255) NOT NULL
                );

                INSERT INTO users (username, password, role, name) VALUES
                    ('admin', 'admin123', 'admin', 'Administrator'),
                    ('safety', 'safety123', 'safety_officer', 'Safety Officer'),
                    ('hrd', 'hrd123', 'hrd', 'HRD Officer')
                ON CONFLICT (username) DO NOTHING;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS users CASCADE;")
            .await?;

        Ok(())
    }
}
