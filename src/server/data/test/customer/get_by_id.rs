use super::*;

/// Tests finding an existing customer by id.
///
/// Expected: Ok(Some(Customer)) with matching data
#[tokio::test]
async fn finds_existing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer_named(db, "Ada", "Lovelace").await?;

    let repo = CustomerRepository::new(db);
    let result = repo.get_by_id(customer.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, customer.id);
    assert_eq!(found.full_name(), "Ada Lovelace");

    Ok(())
}

/// Tests querying for a customer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the existence check used before creating reservations.
///
/// Expected: true for a stored customer, false otherwise
#[tokio::test]
async fn exists_reflects_stored_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.exists(customer.id).await?);
    assert!(!repo.exists(customer.id + 1).await?);

    Ok(())
}
