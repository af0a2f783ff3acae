use super::*;

/// Tests creating a reservation for an existing customer.
///
/// Expected: Ok(Reservation) with exactly the submitted values
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            customer_id: customer.id,
            start_at: at(1, 18),
            num_guests: 4,
            notes: "Birthday".to_string(),
        })
        .await?;

    assert!(reservation.id > 0);
    assert_eq!(reservation.customer_id, customer.id);
    assert_eq!(reservation.start_at, at(1, 18));
    assert_eq!(reservation.num_guests, 4);
    assert_eq!(reservation.notes, "Birthday");

    Ok(())
}

/// Tests that a created reservation shows up in the customer's list.
///
/// Expected: The customer's reservations contain the new reservation
#[tokio::test]
async fn created_reservation_is_listed_for_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let repo = ReservationRepository::new(db);
    let created = repo
        .create(CreateReservationParams {
            customer_id: customer.id,
            start_at: at(2, 19),
            num_guests: 2,
            notes: String::new(),
        })
        .await?;

    let reservations = repo.get_by_customer_id(customer.id).await?;

    assert_eq!(reservations, vec![created]);

    Ok(())
}
