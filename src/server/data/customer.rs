//! Customer data repository for database operations.
//!
//! This module provides the `CustomerRepository` for managing customer records. It
//! handles creation, updates, lookups, name search and the reservation-count ranking,
//! converting entity models to domain models at the infrastructure boundary.

use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::customer::{
    CreateCustomerParams, Customer, RankedCustomer, UpdateCustomerParams,
};

/// Repository providing database operations for customers.
pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    /// Creates a new CustomerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new customer.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The created customer including its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone: ActiveValue::Set(params.phone),
            notes: ActiveValue::Set(params.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    /// Gets a customer by id.
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - Customer found
    /// - `Ok(None)` - No customer with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Gets every customer ordered by last name, then first name.
    pub async fn get_all(&self) -> Result<Vec<Customer>, DbErr> {
        let entities = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::LastName)
            .order_by_asc(entity::customer::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Searches customers by name.
    ///
    /// Splits `name` on whitespace and keeps customers whose first or last name
    /// contains every term. A blank `name` matches every customer. Matching uses SQL
    /// `LIKE`, which SQLite treats case-insensitively for ASCII; `%` and `_` in a term
    /// match literally.
    ///
    /// # Arguments
    /// - `name` - Search text, e.g. `"Smith"` or `"john smi"`
    ///
    /// # Returns
    /// - `Ok(Vec<Customer>)` - Matches ordered by last name, then first name
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, name: &str) -> Result<Vec<Customer>, DbErr> {
        let condition = name.split_whitespace().fold(Condition::all(), |cond, term| {
            cond.add(
                Condition::any()
                    .add(entity::customer::Column::FirstName.like(contains_pattern(term)))
                    .add(entity::customer::Column::LastName.like(contains_pattern(term))),
            )
        });

        let entities = entity::prelude::Customer::find()
            .filter(condition)
            .order_by_asc(entity::customer::Column::LastName)
            .order_by_asc(entity::customer::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Gets the customers with the most reservations.
    ///
    /// Counts reservations per customer, keeps the top `limit` ordered by count
    /// descending (ties broken by customer id ascending) and then loads those customers
    /// in one query. Customers without reservations are never ranked.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of customers to return
    ///
    /// # Returns
    /// - `Ok(Vec<RankedCustomer>)` - Ranked customers with their reservation counts
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_best(&self, limit: u64) -> Result<Vec<RankedCustomer>, DbErr> {
        let counts: Vec<(i32, i64)> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::CustomerId)
            .column_as(entity::reservation::Column::Id.count(), "reservation_count")
            .group_by(entity::reservation::Column::CustomerId)
            .order_by_desc(entity::reservation::Column::Id.count())
            .order_by_asc(entity::reservation::Column::CustomerId)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        if counts.is_empty() {
            return Ok(Vec::new());
        }

        let customer_ids: Vec<i32> = counts.iter().map(|(id, _)| *id).collect();
        let mut customers_map: HashMap<i32, entity::customer::Model> =
            entity::prelude::Customer::find()
                .filter(entity::customer::Column::Id.is_in(customer_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        // Keep the ranking order from the count query
        let ranked = counts
            .into_iter()
            .filter_map(|(customer_id, count)| {
                customers_map
                    .remove(&customer_id)
                    .map(|customer| RankedCustomer {
                        customer: Customer::from_entity(customer),
                        reservation_count: count.max(0) as u64,
                    })
            })
            .collect();

        Ok(ranked)
    }

    /// Overwrites the first name, last name, phone and notes of a customer.
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - The updated customer
    /// - `Ok(None)` - No customer with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateCustomerParams) -> Result<Option<Customer>, DbErr> {
        let Some(customer) = entity::prelude::Customer::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.notes = ActiveValue::Set(params.notes);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Customer::from_entity(entity)))
    }

    /// Checks whether a customer with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `term` anywhere, with wildcard characters escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{}%", escaped)).escape(LIKE_ESCAPE)
}
