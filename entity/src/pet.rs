use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "PetID")]
    pub id: i32,
    #[sea_orm(column_name = "OwnerID")]
    pub owner_id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Species")]
    pub species: String,
    #[sea_orm(column_name = "Breed", nullable)]
    pub breed: Option<String>,
    #[sea_orm(column_name = "Gender")]
    pub gender: String,
    #[sea_orm(column_name = "BirthDate", nullable)]
    pub birth_date: Option<Date>,
    #[sea_orm(column_name = "Color", nullable)]
    pub color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::visit::Entity")]
    Visit,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
