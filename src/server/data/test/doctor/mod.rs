use crate::server::{
    data::doctor::DoctorRepository,
    model::doctor::{CreateDoctorParam, UpdateDoctorParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
