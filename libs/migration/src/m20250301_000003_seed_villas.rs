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
            INSERT INTO villas (name, details, rate, sqft, occupancy, image_url, amenity)
            VALUES
                (
                    'Royal Villa',
                    'Garden-facing villa with a private terrace and outdoor dining area.',
                    200, 550, 4,
                    'https://images.example.com/villas/royal.jpg',
                    ''
                ),
                (
                    'Premium Pool Villa',
                    'Ground-floor villa opening directly onto a shared lagoon pool.',
                    300, 550, 4,
                    'https://images.example.com/villas/premium-pool.jpg',
                    ''
                ),
                (
                    'Luxury Pool Villa',
                    'Two-bedroom villa with a heated plunge pool and sea view.',
                    400, 750, 4,
                    'https://images.example.com/villas/luxury-pool.jpg',
                    ''
                ),
                (
                    'Diamond Villa',
                    'Top-floor villa with panoramic windows and a rooftop lounge.',
                    550, 900, 4,
                    'https://images.example.com/villas/diamond.jpg',
                    ''
                ),
                (
                    'Diamond Pool Villa',
                    'Largest villa on the estate with a private infinity pool.',
                    600, 1100, 4,
                    'https://images.example.com/villas/diamond-pool.jpg',
                    ''
                )
            ON CONFLICT DO NOTHING
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM villas
            WHERE name IN (
                'Royal Villa',
                'Premium Pool Villa',
                'Luxury Pool Villa',
                'Diamond Villa',
                'Diamond Pool Villa'
            )
            "#,
            )
            .await?;

        Ok(())
    }
}
