use crate::server::{
    data::service::ServiceRepository,
    model::service::{CreateServiceParam, UpdateServiceParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
