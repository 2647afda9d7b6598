use crate::server::{
    connection::ConnectionProvider,
    data::doctor::DoctorRepository,
    error::AppError,
    model::doctor::{CreateDoctorParam, Doctor, UpdateDoctorParam},
};

pub struct DoctorService<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> DoctorService<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    /// Gets every doctor
    pub async fn get_all(&self) -> Result<Vec<Doctor>, AppError> {
        let conn = self.connections.acquire().await?;
        let result = DoctorRepository::new(&conn).get_all().await;
        conn.release().await;

        Ok(result?)
    }

    /// Creates a doctor
    pub async fn create(&self, param: CreateDoctorParam) -> Result<Doctor, AppError> {
        let conn = self.connections.acquire().await?;
        let result = DoctorRepository::new(&conn).create(param).await;
        conn.release().await;

        let doctor = result?;
        tracing::debug!("Created doctor {}", doctor.id);

        Ok(doctor)
    }

    /// Replaces a doctor's columns, succeeding even when no row has the id
    pub async fn update(&self, param: UpdateDoctorParam) -> Result<(), AppError> {
        let id = param.id;
        let conn = self.connections.acquire().await?;
        let result = DoctorRepository::new(&conn).update(param).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Update matched no doctor with id {}", id);
        }

        Ok(())
    }

    /// Deletes a doctor, succeeding even when no row has the id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let conn = self.connections.acquire().await?;
        let result = DoctorRepository::new(&conn).delete(id).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Delete matched no doctor with id {}", id);
        }

        Ok(())
    }
}
