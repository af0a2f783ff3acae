use axum::{extract::State, response::IntoResponse};
use dioxus::prelude::*;

use crate::{
    model::customer::{BestCustomersQueryDto, CustomerFormDto, SearchQueryDto},
    server::{
        controller::redirect_to_customer,
        error::AppError,
        model::customer::{CreateCustomerParams, UpdateCustomerParams},
        service::customer::CustomerService,
        state::AppState,
        util::{
            extract::{Form, Path, Query},
            parse::parse_list_size,
        },
    },
    view::{
        self,
        customer::{CustomerDetailPage, CustomerListPage, EditCustomerPage, NewCustomerPage},
    },
};

/// GET / - List all customers
///
/// # Returns
/// - `200 OK`: Customer list page headed "Customers"
/// - `500 Internal Server Error`: Database error
pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customers: Vec<_> = service
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.into_list_item())
        .collect();

    Ok(view::render(rsx! {
        CustomerListPage { header: "Customers".to_string(), customers }
    }))
}

/// GET /add/ - Form to add a new customer
pub async fn new_customer_form() -> impl IntoResponse {
    view::render(rsx! { NewCustomerPage {} })
}

/// POST /add/ - Create a customer from the submitted form
///
/// # Returns
/// - `302 Found`: Redirect to the new customer's detail page
/// - `400 Bad Request`: First or last name missing
/// - `500 Internal Server Error`: Database error
pub async fn create_customer(
    State(state): State<AppState>,
    Form(payload): Form<CustomerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = CreateCustomerParams::from_dto(payload)?;

    let customer = service.create(params).await?;

    Ok(redirect_to_customer(customer.id))
}

/// GET /search/?q= - Search customers by name
///
/// A missing `q` searches for the empty string, which matches every customer.
///
/// # Returns
/// - `200 OK`: Customer list page headed "Customer Search Results", possibly empty
/// - `500 Internal Server Error`: Database error
pub async fn search_customers(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let search_name = query.q.unwrap_or_default();
    tracing::debug!(search_name = %search_name, "Searching customers");

    let service = CustomerService::new(&state.db);

    let customers: Vec<_> = service
        .search(&search_name)
        .await?
        .into_iter()
        .map(|c| c.into_list_item())
        .collect();

    Ok(view::render(rsx! {
        CustomerListPage { header: "Customer Search Results".to_string(), customers }
    }))
}

/// GET /best-customers/?size= - Top customers by reservation count
///
/// `size` defaults to 10 when missing, non-numeric or zero.
///
/// # Returns
/// - `200 OK`: Customer list page headed "Top {size} Customers"
/// - `500 Internal Server Error`: Database error
pub async fn best_customers(
    State(state): State<AppState>,
    Query(query): Query<BestCustomersQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let list_size = parse_list_size(query.size.as_deref());

    let service = CustomerService::new(&state.db);

    let customers: Vec<_> = service
        .get_best(list_size)
        .await?
        .into_iter()
        .map(|c| c.into_list_item())
        .collect();

    let header = format!("Top {} Customers", list_size);

    Ok(view::render(rsx! {
        CustomerListPage { header, customers }
    }))
}

/// GET /{id}/ - Show a customer and their reservations
///
/// # Returns
/// - `200 OK`: Customer detail page
/// - `404 Not Found`: No customer with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.get(id).await?;
    let reservations: Vec<_> = service
        .get_reservations(customer.id)
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    let customer = customer.into_dto();

    Ok(view::render(rsx! {
        CustomerDetailPage { customer, reservations }
    }))
}

/// GET /{id}/edit/ - Form to edit a customer
///
/// # Returns
/// - `200 OK`: Edit form pre-filled with the customer's current values
/// - `404 Not Found`: No customer with that id
pub async fn edit_customer_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.get(id).await?.into_dto();

    Ok(view::render(rsx! {
        EditCustomerPage { customer }
    }))
}

/// POST /{id}/edit/ - Overwrite a customer's details from the submitted form
///
/// # Returns
/// - `302 Found`: Redirect to the customer's detail page
/// - `400 Bad Request`: First or last name missing
/// - `404 Not Found`: No customer with that id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(payload): Form<CustomerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let params = UpdateCustomerParams::from_dto(id, payload)?;

    let customer = service.update(params).await?;

    Ok(redirect_to_customer(customer.id))
}
