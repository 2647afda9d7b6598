//! Operations on the clinic's price list (`services` table).

use crate::server::{
    connection::ConnectionProvider,
    data::service::ServiceRepository,
    error::AppError,
    model::service::{ClinicService, CreateServiceParam, UpdateServiceParam},
};

pub struct CatalogService<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> CatalogService<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    pub async fn get_all(&self) -> Result<Vec<ClinicService>, AppError> {
        let conn = self.connections.acquire().await?;
        let result = ServiceRepository::new(&conn).get_all().await;
        conn.release().await;

        Ok(result?)
    }

    pub async fn create(&self, param: CreateServiceParam) -> Result<ClinicService, AppError> {
        let conn = self.connections.acquire().await?;
        let result = ServiceRepository::new(&conn).create(param).await;
        conn.release().await;

        let service = result?;
        tracing::debug!("Created service {}", service.id);

        Ok(service)
    }

    pub async fn update(&self, param: UpdateServiceParam) -> Result<(), AppError> {
        let id = param.id;
        let conn = self.connections.acquire().await?;
        let result = ServiceRepository::new(&conn).update(param).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Update matched no service with id {}", id);
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let conn = self.connections.acquire().await?;
        let result = ServiceRepository::new(&conn).delete(id).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Delete matched no service with id {}", id);
        }

        Ok(())
    }
}
