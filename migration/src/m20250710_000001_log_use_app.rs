use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每次排名查询一行审计记录
        manager
            .create_table(
                Table::create()
                    .table(LogUseApp::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogUseApp::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LogUseApp::Username).string().not_null())
                    .col(
                        ColumnDef::new(LogUseApp::RequestTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LogUseApp::NumCountriesReturned)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LogUseApp::CountriesDetails)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogUseApp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogUseApp {
    #[sea_orm(iden = "log_use_app")]
    Table,
    Id,
    Username,
    RequestTimestamp,
    NumCountriesReturned,
    CountriesDetails,
}
