mod common;

use page_analytics::domain::entities::NewPageView;
use page_analytics::domain::repositories::PageViewRepository;
use page_analytics::infrastructure::persistence::PgPageViewRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_record_returns_stored_view(pool: PgPool) {
    let repo = PgPageViewRepository::new(Arc::new(pool));

    let view = repo
        .record(NewPageView {
            page_url: "/docs".to_string(),
            username: Some("alice".to_string()),
        })
        .await
        .unwrap();

    assert!(view.id > 0);
    assert_eq!(view.page_url, "/docs");
    assert_eq!(view.username, Some("alice".to_string()));
}

#[sqlx::test]
async fn test_count_all_empty(pool: PgPool) {
    let repo = PgPageViewRepository::new(Arc::new(pool));

    assert_eq!(repo.count_all().await.unwrap(), 0);
    assert!(repo.count_by_page().await.unwrap().is_empty());
    assert!(repo.count_by_user().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_count_by_page_orders_descending(pool: PgPool) {
    let repo = PgPageViewRepository::new(Arc::new(pool.clone()));

    for _ in 0..3 {
        common::create_test_view(&pool, "/popular", None).await;
    }
    common::create_test_view(&pool, "/rare", None).await;

    let counts = repo.count_by_page().await.unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].page_url, "/popular");
    assert_eq!(counts[0].views, 3);
    assert_eq!(counts[1].page_url, "/rare");
    assert_eq!(counts[1].views, 1);

    assert_eq!(repo.count_all().await.unwrap(), 4);
}

#[sqlx::test]
async fn test_count_by_user_includes_anonymous_group(pool: PgPool) {
    let repo = PgPageViewRepository::new(Arc::new(pool.clone()));

    common::create_test_view(&pool, "/a", Some("alice")).await;
    common::create_test_view(&pool, "/b", None).await;
    common::create_test_view(&pool, "/c", None).await;

    let counts = repo.count_by_user().await.unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].username, None);
    assert_eq!(counts[0].views, 2);
    assert_eq!(counts[1].username, Some("alice".to_string()));
    assert_eq!(counts[1].views, 1);
}
