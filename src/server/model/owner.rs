use crate::model::owner::OwnerDto;

/// An owner row. Owners are read-only in this application.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Owner {
    pub fn from_entity(entity: entity::owner::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            owner_id: self.id,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}
