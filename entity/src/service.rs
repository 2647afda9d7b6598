use sea_orm::entity::prelude::*;

/// A billable clinic service (consultation, vaccination, ...).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ServiceID")]
    pub id: i32,
    #[sea_orm(column_name = "ServiceName")]
    pub service_name: String,
    #[sea_orm(column_name = "Cost", column_type = "Double")]
    pub cost: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
