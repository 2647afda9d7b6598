use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visits")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "VisitID")]
    pub id: i32,
    #[sea_orm(column_name = "PetID")]
    pub pet_id: i32,
    #[sea_orm(column_name = "DoctorID")]
    pub doctor_id: i32,
    #[sea_orm(column_name = "VisitDate")]
    pub visit_date: Date,
    #[sea_orm(column_name = "Diagnosis", column_type = "Text", nullable)]
    pub diagnosis: Option<String>,
    #[sea_orm(column_name = "Recommendations", column_type = "Text", nullable)]
    pub recommendations: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id"
    )]
    Pet,
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id"
    )]
    Doctor,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
