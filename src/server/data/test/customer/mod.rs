use crate::server::{
    data::customer::CustomerRepository,
    model::customer::{CreateCustomerParams, UpdateCustomerParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_best;
mod get_by_id;
mod search;
mod update;
