use crate::server::{
    connection::ConnectionProvider,
    data::pet::PetRepository,
    error::AppError,
    model::pet::{CreatePetParam, Pet, UpdatePetParam},
};

pub struct PetService<'a> {
    connections: &'a ConnectionProvider,
}

impl<'a> PetService<'a> {
    pub fn new(connections: &'a ConnectionProvider) -> Self {
        Self { connections }
    }

    pub async fn get_all(&self) -> Result<Vec<Pet>, AppError> {
        let conn = self.connections.acquire().await?;
        let result = PetRepository::new(&conn).get_all().await;
        conn.release().await;

        Ok(result?)
    }

    /// Creates a pet; an unknown owner surfaces as a constraint error
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        let conn = self.connections.acquire().await?;
        let result = PetRepository::new(&conn).create(param).await;
        conn.release().await;

        let pet = result?;
        tracing::debug!("Created pet {} for owner {}", pet.id, pet.owner_id);

        Ok(pet)
    }

    pub async fn update(&self, param: UpdatePetParam) -> Result<(), AppError> {
        let id = param.id;
        let conn = self.connections.acquire().await?;
        let result = PetRepository::new(&conn).update(param).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Update matched no pet with id {}", id);
        }

        Ok(())
    }

    /// Deletes a pet; pets with visits are rejected by the database
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let conn = self.connections.acquire().await?;
        let result = PetRepository::new(&conn).delete(id).await;
        conn.release().await;

        if result? == 0 {
            tracing::debug!("Delete matched no pet with id {}", id);
        }

        Ok(())
    }
}
