use super::*;

/// Tests searching by last name.
///
/// Expected: Only customers whose name contains "Smith"
#[tokio::test]
async fn matches_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "John", "Smith").await?;
    factory::customer::create_customer_named(db, "Jane", "Smithers").await?;
    factory::customer::create_customer_named(db, "Bob", "Jones").await?;

    let repo = CustomerRepository::new(db);
    let names: Vec<String> = repo
        .search("Smith")
        .await?
        .iter()
        .map(|c| c.full_name())
        .collect();

    assert_eq!(names, vec!["John Smith", "Jane Smithers"]);

    Ok(())
}

/// Tests that matching ignores ASCII case.
///
/// Expected: "smith" finds "John Smith"
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "John", "Smith").await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.search("smith").await?;

    assert_eq!(customers.len(), 1);

    Ok(())
}

/// Tests a full name search where each term must match first or last name.
///
/// Expected: "john smi" finds John Smith but not Jane Smithers or John Jones
#[tokio::test]
async fn requires_every_term_to_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "John", "Smith").await?;
    factory::customer::create_customer_named(db, "Jane", "Smithers").await?;
    factory::customer::create_customer_named(db, "John", "Jones").await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.search("john smi").await?;

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].full_name(), "John Smith");

    Ok(())
}

/// Tests a search with no matches.
///
/// Expected: Ok(empty vec), not an error
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "John", "Smith").await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.search("Nobody").await?;

    assert!(customers.is_empty());

    Ok(())
}

/// Tests that a blank search returns every customer.
///
/// Expected: All customers
#[tokio::test]
async fn blank_search_returns_everyone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer(db).await?;
    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.search("   ").await?;

    assert_eq!(customers.len(), 2);

    Ok(())
}

/// Tests that `%` and `_` in a search are matched literally.
///
/// Expected: Neither character matches names that do not contain it
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "Ada", "Lovelace").await?;
    factory::customer::create_customer_named(db, "John", "Smith").await?;

    let repo = CustomerRepository::new(db);

    assert!(repo.search("%").await?.is_empty());
    assert!(repo.search("_").await?.is_empty());
    assert!(repo.search("\\").await?.is_empty());

    Ok(())
}

/// Tests that names containing wildcard characters can still be found.
///
/// Expected: "n_b" finds "Ann_Beth" only, "50%" finds "50%Off" only
#[tokio::test]
async fn matches_names_containing_wildcards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer::create_customer_named(db, "Ann_Beth", "Jones").await?;
    factory::customer::create_customer_named(db, "Annxbeth", "Jones").await?;
    factory::customer::create_customer_named(db, "Promo", "50%Off").await?;
    factory::customer::create_customer_named(db, "Promo", "500ff").await?;

    let repo = CustomerRepository::new(db);

    let underscore = repo.search("n_b").await?;
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].first_name, "Ann_Beth");

    let percent = repo.search("50%").await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].last_name, "50%Off");

    Ok(())
}
