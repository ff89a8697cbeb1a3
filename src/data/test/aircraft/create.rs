use super::*;

/// Tests registering an aircraft.
///
/// Expected: Ok with the aircraft retrievable by registration
#[tokio::test]
async fn creates_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = AircraftRepository::new(db);

    let airline = factory::create_airline(db).await?;
    let created = repo.create(params("TC-JFK", airline.id)).await?;

    assert_eq!(created.airline_id, airline.id);
    assert!(created.active);
    assert_eq!(repo.get_by_registration("TC-JFK").await?, Some(created));
    assert!(repo.registration_exists("TC-JFK").await?);

    Ok(())
}

/// Tests that registrations are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    AircraftFactory::new(db, airline.id)
        .registration("TC-JFK")
        .build()
        .await?;

    let err = AircraftRepository::new(db)
        .create(params("TC-JFK", airline.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
