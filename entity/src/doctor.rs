use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "DoctorID")]
    pub id: i32,
    #[sea_orm(column_name = "FullName")]
    pub full_name: String,
    #[sea_orm(column_name = "Specialization")]
    pub specialization: String,
    #[sea_orm(column_name = "Experience")]
    pub experience: i32,
    #[sea_orm(column_name = "Phone")]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::visit::Entity")]
    Visit,
}

impl Related<super::visit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
