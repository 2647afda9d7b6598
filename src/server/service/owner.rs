use crate::server::{
    connection::ConnectionProvider, data::owner::OwnerRepository, error::AppError,
    model::owner::Owner,
};

pub struct OwnerService<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> OwnerService<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    /// Gets every owner
    pub async fn get_all(&self) -> Result<Vec<Owner>, AppError> {
        let conn = self.connections.acquire().await?;
        let result = OwnerRepository::new(&conn).get_all().await;
        conn.release().await;

        Ok(result?)
    }
}
