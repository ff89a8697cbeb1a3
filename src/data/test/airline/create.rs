use super::*;

/// Tests creating an airline.
///
/// Expected: Ok with the airline active at version 0 and retrievable by code
#[tokio::test]
async fn creates_active_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = AirlineRepository::new(db);

    let created = repo.create(params("TK", "Turkish Airlines")).await?;

    assert!(created.active);
    assert_eq!(created.version, 0);
    assert_eq!(repo.get_by_code("TK").await?, Some(created.clone()));
    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}

/// Tests that the airline code column is unique, active or not.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AirlineFactory::new(db).code("TK").active(false).build().await?;

    let err = AirlineRepository::new(db)
        .create(params("TK", "Another Carrier"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
