use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::Thumbnail).string().not_null())
                    .col(ColumnDef::new(Items::Title).string().not_null())
                    .col(ColumnDef::new(Items::PostType).string().not_null())
                    .col(ColumnDef::new(Items::Description).string().not_null())
                    .col(ColumnDef::new(Items::Category).string().not_null())
                    .col(ColumnDef::new(Items::Date).string().not_null())
                    .col(ColumnDef::new(Items::Location).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Search filter columns
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_title")
                    .table(Items::Table)
                    .col(Items::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_location")
                    .table(Items::Table)
                    .col(Items::Location)
                    .to_owned(),
            )
            .await?;

        // Create recovered_items table.
        // ItemId is a caller-supplied reference, deliberately not a foreign key.
        manager
            .create_table(
                Table::create()
                    .table(RecoveredItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecoveredItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecoveredItems::ItemId).string().not_null())
                    .col(
                        ColumnDef::new(RecoveredItems::RecoveredUserEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecoveredItems::RecoveredUserName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecoveredItems::RecoveredDate)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecoveredItems::RecoveredLocation)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Ownership-check filter column
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_recovered_items_user_email")
                    .table(RecoveredItems::Table)
                    .col(RecoveredItems::RecoveredUserEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecoveredItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Thumbnail,
    Title,
    PostType,
    Description,
    Category,
    Date,
    Location,
}

#[derive(DeriveIden)]
enum RecoveredItems {
    Table,
    Id,
    ItemId,
    RecoveredUserEmail,
    RecoveredUserName,
    RecoveredDate,
    RecoveredLocation,
}
