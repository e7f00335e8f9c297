use sea_orm::entity::prelude::*;

// ItemId references an items row but is caller-supplied data, not a
// store-level foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recovered_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    #[sea_orm(indexed)]
    pub recovered_user_email: String,
    pub recovered_user_name: String,
    pub recovered_date: String,
    pub recovered_location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
