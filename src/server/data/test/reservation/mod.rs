use crate::server::{
    data::reservation::ReservationRepository, model::reservation::CreateReservationParams,
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
