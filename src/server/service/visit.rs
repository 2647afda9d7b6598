use crate::server::{
    connection::ConnectionProvider,
    data::visit::VisitRepository,
    error::AppError,
    model::visit::{CreateVisitParam, UpdateVisitParam, Visit},
};

pub struct VisitService<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> VisitService<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    pub async fn get_all(&self) -> Result<Vec<Visit>, AppError> {
        let conn = self.connections.acquire().await?;
        let result = VisitRepository::new(&conn).get_all().await;
        conn.release().await;

        Ok(result?)
    }

    /// Records a visit, dated today unless the parameter carries a date
    pub async fn create(&self, param: CreateVisitParam) -> Result<Visit, AppError> {
        let conn = self.connections.acquire().await?;
        let result = VisitRepository::new(&conn).create(param).await;
        conn.release().await;

        let visit = result?;
        tracing::debug!(
            "Created visit {} for pet {} with doctor {}",
            visit.id,
            visit.pet_id,
            visit.doctor_id
        );

        Ok(visit)
    }

    pub async fn update(&self, param: UpdateVisitParam) -> Result<(), AppError> {
        let id = param.id;
        let conn = self.connections.acquire().await?;
        let result = VisitRepository::new(&conn).update(param).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Update matched no visit with id {}", id);
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let conn = self.connections.acquire().await?;
        let result = VisitRepository::new(&conn).delete(id).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Delete matched no visit with id {}", id);
        }

        Ok(())
    }
}
