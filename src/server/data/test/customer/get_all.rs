use super::*;

/// Tests listing customers on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customers = repo.get_all().await?;

    assert!(customers.is_empty());

    Ok(())
}

/// Tests that customers are ordered by last name, then first name.
///
/// Expected: Babbage, Charles; Lovelace, Ada; Lovelace, Byron
#[tokio::test]
async fn orders_by_last_then_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "Byron", "Lovelace").await?;
    factory::customer::create_customer_named(db, "Charles", "Babbage").await?;
    factory::customer::create_customer_named(db, "Ada", "Lovelace").await?;

    let repo = CustomerRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .iter()
        .map(|c| c.full_name())
        .collect();

    assert_eq!(
        names,
        vec!["Charles Babbage", "Ada Lovelace", "Byron Lovelace"]
    );

    Ok(())
}
