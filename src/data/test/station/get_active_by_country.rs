use super::*;

/// Tests filtering stations by country.
///
/// Expected: Ok with only the active stations of that country, ordered by code
#[tokio::test]
async fn returns_active_stations_in_country() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StationFactory::new(db).code("IST").country("Turkey").build().await?;
    StationFactory::new(db).code("ESB").country("Turkey").build().await?;
    StationFactory::new(db).code("ADB").country("Turkey").active(false).build().await?;
    StationFactory::new(db).code("LHR").country("United Kingdom").build().await?;

    let stations = StationRepository::new(db).get_active_by_country("Turkey").await?;

    let codes: Vec<_> = stations.iter().map(|s| s.station_code.as_str()).collect();
    assert_eq!(codes, ["ESB", "IST"]);

    Ok(())
}

/// Tests pagination totals across inactive stations.
///
/// Expected: Ok with total counting active stations only
#[tokio::test]
async fn paginates_active_stations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_station(db).await?;
    }
    StationFactory::new(db).active(false).build().await?;

    let (stations, total) = StationRepository::new(db).get_active_paginated(0, 2).await?;

    assert_eq!(stations.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}
