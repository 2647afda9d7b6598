use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::doctor::{CreateDoctorParam, Doctor, UpdateDoctorParam};

pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every doctor
    pub async fn get_all(&self) -> Result<Vec<Doctor>, DbErr> {
        let doctors = entity::prelude::Doctor::find().all(self.db).await?;

        Ok(doctors.into_iter().map(Doctor::from_entity).collect())
    }

    /// Inserts a doctor, the id is assigned by the database
    pub async fn create(&self, param: CreateDoctorParam) -> Result<Doctor, DbErr> {
        let doctor = entity::doctor::ActiveModel {
            full_name: ActiveValue::Set(param.full_name),
            specialization: ActiveValue::Set(param.specialization),
            experience: ActiveValue::Set(param.experience),
            phone: ActiveValue::Set(param.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Doctor::from_entity(doctor))
    }

    /// Replaces every column of the doctor, returns the number of rows affected
    pub async fn update(&self, param: UpdateDoctorParam) -> Result<u64, DbErr> {
        let result = entity::prelude::Doctor::update_many()
            .set(entity::doctor::ActiveModel {
                full_name: ActiveValue::Set(param.full_name),
                specialization: ActiveValue::Set(param.specialization),
                experience: ActiveValue::Set(param.experience),
                phone: ActiveValue::Set(param.phone),
                ..Default::default()
            })
            .filter(entity::doctor::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a doctor by id, returns the number of rows affected
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Doctor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
