use chrono::Local;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::visit::{CreateVisitParam, UpdateVisitParam, Visit};

pub struct VisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every visit
    pub async fn get_all(&self) -> Result<Vec<Visit>, DbErr> {
        let visits = entity::prelude::Visit::find().all(self.db).await?;

        Ok(visits.into_iter().map(Visit::from_entity).collect())
    }

    /// Inserts a visit, defaulting the visit date to today's server-local date
    ///
    /// Fails with a foreign key violation when the pet or doctor does not exist.
    pub async fn create(&self, param: CreateVisitParam) -> Result<Visit, DbErr> {
        let visit_date = param
            .visit_date
            .unwrap_or_else(|| Local::now().date_naive());

        let visit = entity::visit::ActiveModel {
            pet_id: ActiveValue::Set(param.pet_id),
            doctor_id: ActiveValue::Set(param.doctor_id),
            visit_date: ActiveValue::Set(visit_date),
            diagnosis: ActiveValue::Set(param.diagnosis),
            recommendations: ActiveValue::Set(param.recommendations),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Visit::from_entity(visit))
    }

    /// Replaces a visit's columns, returns the number of rows affected
    ///
    /// The stored visit date is kept when the parameter carries none.
    pub async fn update(&self, param: UpdateVisitParam) -> Result<u64, DbErr> {
        let visit_date = match param.visit_date {
            Some(date) => ActiveValue::Set(date),
            None => ActiveValue::NotSet,
        };

        let result = entity::prelude::Visit::update_many()
            .set(entity::visit::ActiveModel {
                pet_id: ActiveValue::Set(param.pet_id),
                doctor_id: ActiveValue::Set(param.doctor_id),
                visit_date,
                diagnosis: ActiveValue::Set(param.diagnosis),
                recommendations: ActiveValue::Set(param.recommendations),
                ..Default::default()
            })
            .filter(entity::visit::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Visit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
