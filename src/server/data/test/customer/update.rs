use super::*;

/// Tests overwriting a customer's mutable fields.
///
/// Verifies a full overwrite: every field takes the submitted value, including
/// fields submitted empty.
///
/// Expected: Ok(Some(Customer)) with exactly the submitted values
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .phone("555-0100")
        .notes("Regular")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let updated = repo
        .update(UpdateCustomerParams {
            id: customer.id,
            first_name: "Augusta".to_string(),
            last_name: "King".to_string(),
            phone: String::new(),
            notes: String::new(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, "King");
    assert_eq!(updated.phone, "");
    assert_eq!(updated.notes, "");

    let stored = repo.get_by_id(customer.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a customer that does not exist.
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
    let result = repo
        .update(UpdateCustomerParams {
            id: 404,
            first_name: "No".to_string(),
            last_name: "One".to_string(),
            phone: String::new(),
            notes: String::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
