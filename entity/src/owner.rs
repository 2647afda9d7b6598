use sea_orm::entity::prelude::*;

/// Pet owner. Owners are maintained outside this application and are only read here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "OwnerID")]
    pub id: i32,
    #[sea_orm(column_name = "FullName")]
    pub full_name: String,
    #[sea_orm(column_name = "Phone", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_name = "Email", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_name = "Address", nullable)]
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet::Entity")]
    Pet,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
