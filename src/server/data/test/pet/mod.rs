use crate::server::{
    data::pet::PetRepository,
    model::pet::{CreatePetParam, UpdatePetParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn create_param(owner_id: i32) -> CreatePetParam {
    CreatePetParam {
        owner_id,
        name: "Barsik".to_string(),
        species: "Cat".to_string(),
        breed: Some("Siberian".to_string()),
        gender: "M".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2020, 5, 17),
        color: Some("Grey".to_string()),
    }
}
