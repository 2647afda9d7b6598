use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::service::{ClinicService, CreateServiceParam, UpdateServiceParam};

/// Repository for the `services` price list.
pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ClinicService>, DbErr> {
        let services = entity::prelude::Service::find().all(self.db).await?;

        Ok(services.into_iter().map(ClinicService::from_entity).collect())
    }

    pub async fn create(&self, param: CreateServiceParam) -> Result<ClinicService, DbErr> {
        let service = entity::service::ActiveModel {
            service_name: ActiveValue::Set(param.service_name),
            cost: ActiveValue::Set(param.cost),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ClinicService::from_entity(service))
    }

    pub async fn update(&self, param: UpdateServiceParam) -> Result<u64, DbErr> {
        let result = entity::prelude::Service::update_many()
            .set(entity::service::ActiveModel {
                service_name: ActiveValue::Set(param.service_name),
                cost: ActiveValue::Set(param.cost),
                ..Default::default()
            })
            .filter(entity::service::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
