use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::owner::Owner;

pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every owner
    pub async fn get_all(&self) -> Result<Vec<Owner>, DbErr> {
        let owners = entity::prelude::Owner::find().all(self.db).await?;

        Ok(owners.into_iter().map(Owner::from_entity).collect())
    }
}
