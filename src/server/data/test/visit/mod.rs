use crate::server::{
    data::visit::VisitRepository,
    model::visit::{CreateVisitParam, UpdateVisitParam},
};
use chrono::{Local, NaiveDate};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
