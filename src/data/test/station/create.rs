use super::*;

/// Tests creating a station with coordinates.
///
/// Expected: Ok with coordinates stored and the station found by code
#[tokio::test]
async fn creates_station_with_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = StationRepository::new(db);

    let created = repo
        .create(CreateStationParams {
            station_code: "SAW".to_string(),
            station_name: "Sabiha Gokcen".to_string(),
            city: Some("Istanbul".to_string()),
            country: Some("Turkey".to_string()),
            address: None,
            timezone: Some("Europe/Istanbul".to_string()),
            latitude: Some(40.8986),
            longitude: Some(29.3092),
            altitude: Some(312),
            description: None,
        })
        .await?;

    assert!(created.active);
    assert_eq!(created.latitude, Some(40.8986));
    assert_eq!(repo.get_by_code("SAW").await?.map(|s| s.id), Some(created.id));
    assert!(repo.code_exists("SAW").await?);
    assert!(repo.name_exists_ignore_case("SABIHA GOKCEN").await?);

    Ok(())
}
