use super::*;
use test_utils::factory::reservation::create_reservations;

/// Tests ranking customers by reservation count.
///
/// Expected: Customers ordered by descending count with counts attached
#[tokio::test]
async fn orders_by_reservation_count_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let few = factory::create_customer(db).await?;
    let many = factory::create_customer(db).await?;
    let some = factory::create_customer(db).await?;
    create_reservations(db, few.id, 1).await?;
    create_reservations(db, many.id, 4).await?;
    create_reservations(db, some.id, 2).await?;

    let repo = CustomerRepository::new(db);
    let ranked = repo.get_best(10).await?;

    let ranking: Vec<(i32, u64)> = ranked
        .iter()
        .map(|r| (r.customer.id, r.reservation_count))
        .collect();
    assert_eq!(ranking, vec![(many.id, 4), (some.id, 2), (few.id, 1)]);

    Ok(())
}

/// Tests that the ranking honours the limit.
///
/// Expected: At most `limit` customers, the top ones
#[tokio::test]
async fn returns_at_most_limit_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for count in 1..=7 {
        let customer = factory::create_customer(db).await?;
        create_reservations(db, customer.id, count).await?;
    }

    let repo = CustomerRepository::new(db);
    let ranked = repo.get_best(5).await?;

    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0].reservation_count, 7);
    assert_eq!(ranked[4].reservation_count, 3);

    Ok(())
}

/// Tests that customers without reservations are not ranked.
///
/// Expected: Only the customer with a reservation
#[tokio::test]
async fn excludes_customers_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;
    let (booked, _) = factory::create_customer_with_reservations(db, 1).await?;

    let repo = CustomerRepository::new(db);
    let ranked = repo.get_best(10).await?;

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].customer.id, booked.id);

    Ok(())
}

/// Tests that ties are broken by customer id.
///
/// Expected: Lower id first when counts are equal
#[tokio::test]
async fn breaks_ties_by_customer_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::create_customer_with_reservations(db, 2).await?;
    let (second, _) = factory::create_customer_with_reservations(db, 2).await?;

    let repo = CustomerRepository::new(db);
    let ranked = repo.get_best(10).await?;

    assert_eq!(ranked[0].customer.id, first.id);
    assert_eq!(ranked[1].customer.id, second.id);

    Ok(())
}

/// Tests ranking with no reservations at all.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.get_best(10).await?.is_empty());

    Ok(())
}
