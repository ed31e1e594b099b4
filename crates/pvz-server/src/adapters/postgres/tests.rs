//! Repository tests against a live PostgreSQL.
//!
//! Each test migrates a fresh schema on the database named by
//! `DATABASE_URL`. Without it the tests log a notice and return.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use uuid::Uuid;

use pvz::{
    Account, AccountRepository, City, DomainError, ErrorKind, Item, ItemRepository, ItemType,
    PickupPoint, PickupPointFilter, PickupPointRepository, Reception, ReceptionRepository, Role,
};

use super::{PgAccountRepository, PgItemRepository, PgPickupPointRepository, PgReceptionRepository};

struct TestDb {
    admin: PgPool,
    pool: PgPool,
    schema: String,
}

impl TestDb {
    async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL is not set, skipping Postgres repository test");
            return None;
        };

        let schema = format!("pvz_test_{}", Uuid::new_v4().simple());
        let admin = PgPool::connect(&url).await.expect("connect to DATABASE_URL");
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .expect("create test schema");

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("connect test pool");

        sqlx::migrate!().run(&pool).await.expect("run migrations");

        Some(Self {
            admin,
            pool,
            schema,
        })
    }

    async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop test schema");
    }

    fn pickup_points(&self) -> PgPickupPointRepository {
        PgPickupPointRepository::new(self.pool.clone())
    }

    fn receptions(&self) -> PgReceptionRepository {
        PgReceptionRepository::new(self.pool.clone())
    }

    fn items(&self) -> PgItemRepository {
        PgItemRepository::new(self.pool.clone())
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

async fn seeded_reception(db: &TestDb) -> (PickupPoint, Reception) {
    let pvz = db
        .pickup_points()
        .save(&PickupPoint::new(City::Kazan))
        .await
        .unwrap();
    let reception = db
        .receptions()
        .save(&Reception::open(pvz.id))
        .await
        .unwrap();
    (pvz, reception)
}

#[tokio::test]
async fn test_second_open_reception_hits_unique_index() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let receptions = db.receptions();
    let (pvz, mut first) = seeded_reception(&db).await;

    let err = receptions.save(&Reception::open(pvz.id)).await.unwrap_err();
    assert_eq!(err, DomainError::ReceptionAlreadyOpen(pvz.id));

    // Closing goes through the upsert and frees the slot
    first.close(base_time()).unwrap();
    let closed = receptions.save(&first).await.unwrap();
    assert_eq!(closed.id, first.id);
    assert!(!closed.is_open());
    assert_eq!(closed.date_time, base_time());
    assert!(receptions.find_active(pvz.id).await.unwrap().is_none());

    let reopened = receptions.save(&Reception::open(pvz.id)).await.unwrap();
    let active = receptions.find_active(pvz.id).await.unwrap().unwrap();
    assert_eq!(active.id, reopened.id);

    db.teardown().await;
}

#[tokio::test]
async fn test_missing_parents_are_not_found() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let err = db
        .receptions()
        .save(&Reception::open(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = db
        .items()
        .save(&Item::new(Uuid::new_v4(), ItemType::Shoes))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    db.teardown().await;
}

#[tokio::test]
async fn test_items_drain_latest_first() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let items = db.items();
    let (pvz, reception) = seeded_reception(&db).await;

    let mut saved = Vec::new();
    for (offset, item_type) in [ItemType::Clothes, ItemType::Electronics, ItemType::Shoes]
        .into_iter()
        .enumerate()
    {
        let item = Item {
            received_at: base_time() + Duration::seconds(offset as i64),
            ..Item::new(reception.id, item_type)
        };
        saved.push(items.save(&item).await.unwrap().id);
    }

    let active = db.receptions().find_active(pvz.id).await.unwrap().unwrap();
    assert_eq!(active.items, saved);

    while let Some(expected) = saved.pop() {
        let removed = items.delete_most_recent(reception.id).await.unwrap();
        assert_eq!(removed.map(|i| i.id), Some(expected));
    }
    assert!(items.delete_most_recent(reception.id).await.unwrap().is_none());
    assert!(items.list_by_reception(reception.id).await.unwrap().is_empty());

    db.teardown().await;
}

#[tokio::test]
async fn test_concurrent_removals_take_distinct_items() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let items = db.items();
    let (_, reception) = seeded_reception(&db).await;

    for offset in 0..2 {
        let item = Item {
            received_at: base_time() + Duration::seconds(offset),
            ..Item::new(reception.id, ItemType::Electronics)
        };
        items.save(&item).await.unwrap();
    }

    let (first, second) = tokio::join!(
        items.delete_most_recent(reception.id),
        items.delete_most_recent(reception.id)
    );
    let first = first.unwrap().expect("first removal finds an item");
    let second = second.unwrap().expect("second removal finds an item");
    assert_ne!(first.id, second.id);
    assert!(items.list_by_reception(reception.id).await.unwrap().is_empty());

    db.teardown().await;
}

#[tokio::test]
async fn test_listing_bounds_and_pages() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let pickup_points = db.pickup_points();

    let mut ids = Vec::new();
    for day in 0..3 {
        let pvz = PickupPoint {
            registered_at: base_time() + Duration::days(day),
            ..PickupPoint::new(City::Moscow)
        };
        ids.push(pickup_points.save(&pvz).await.unwrap().id);
    }

    let filter = |start, end, page, page_size| PickupPointFilter {
        start,
        end,
        page,
        page_size,
    };
    let listed = |found: Vec<PickupPoint>| found.into_iter().map(|p| p.id).collect::<Vec<_>>();

    let all = pickup_points.list(&filter(None, None, 1, 10)).await.unwrap();
    assert_eq!(listed(all), ids);

    // Both bounds are inclusive
    let window = filter(
        Some(base_time() + Duration::days(1)),
        Some(base_time() + Duration::days(2)),
        1,
        10,
    );
    assert_eq!(
        listed(pickup_points.list(&window).await.unwrap()),
        vec![ids[1], ids[2]]
    );

    let second_page = pickup_points.list(&filter(None, None, 2, 1)).await.unwrap();
    assert_eq!(listed(second_page), vec![ids[1]]);
    let past_end = pickup_points.list(&filter(None, None, 4, 1)).await.unwrap();
    assert!(past_end.is_empty());

    db.teardown().await;
}

#[tokio::test]
async fn test_receptions_listed_with_item_ids() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let receptions = db.receptions();
    let (pvz, mut first) = seeded_reception(&db).await;

    let item = db
        .items()
        .save(&Item::new(first.id, ItemType::Clothes))
        .await
        .unwrap();
    first.close(Utc::now()).unwrap();
    receptions.save(&first).await.unwrap();
    let second = receptions.save(&Reception::open(pvz.id)).await.unwrap();

    let listed = receptions.list_by_pickup_point(pvz.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].items, vec![item.id]);
    assert_eq!(listed[1].id, second.id);
    assert!(listed[1].items.is_empty());

    db.teardown().await;
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let accounts = PgAccountRepository::new(db.pool.clone());

    let account = Account::new("staff@example.com".to_string(), Role::Staff);
    accounts.create(&account, "hash").await.unwrap();
    let err = accounts
        .create(
            &Account::new("staff@example.com".to_string(), Role::Client),
            "hash",
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let (found, hash) = accounts
        .find_by_email("staff@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, account.id);
    assert_eq!(hash, "hash");

    db.teardown().await;
}
