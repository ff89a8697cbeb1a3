use super::*;

/// Tests that archived events are paged newest first.
///
/// Expected: Ok with the latest event on the first page
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = EventLogFactory::new(db).event_timestamp(june(1, 8, 0)).build().await?;
    let newest = EventLogFactory::new(db).event_timestamp(june(1, 10, 0)).build().await?;
    let middle = EventLogFactory::new(db).event_timestamp(june(1, 9, 0)).build().await?;

    let repo = EventLogRepository::new(db);
    let (first_page, total) = repo.get_paginated(0, 2).await?;
    let (second_page, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );
    assert_eq!(
        second_page.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}
