use engine::{NewCategory, TransactionKind};

use super::{
    fake::{ANON_KEY, USER_EMAIL, USER_ID, USER_TOKEN, signed_in_client, spawn_backend},
    *,
};

#[tokio::test]
async fn sign_in_returns_session() {
    let (base_url, _) = spawn_backend().await;
    let client = Client::new(&base_url, ANON_KEY).unwrap();

    let session = client.sign_in(USER_EMAIL, "hunter2").await.unwrap();
    assert_eq!(session.access_token, USER_TOKEN);
    assert_eq!(session.user.id.to_string(), USER_ID);
    assert_eq!(session.user.email.as_deref(), Some(USER_EMAIL));
}

#[tokio::test]
async fn wrong_password_is_a_validation_error() {
    let (base_url, _) = spawn_backend().await;
    let client = Client::new(&base_url, ANON_KEY).unwrap();

    match client.sign_in("me@example.com", "nope").await {
        Err(ClientError::Validation(msg)) => assert_eq!(msg, "Invalid login credentials"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn range_query_uses_inclusive_bounds_and_newest_first() {
    let (client, seen) = signed_in_client().await;
    let range = DateRange::parse("2026-10-01", "2026-10-16").unwrap();

    let rows = client.transactions_in_range(&range).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Lunch");

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.queries[0],
        "select=*&date=gte.2026-10-01&date=lte.2026-10-16&order=date.desc"
    );
}

#[tokio::test]
async fn missing_token_maps_to_unauthorized() {
    let (base_url, _) = spawn_backend().await;
    let client = Client::new(&base_url, ANON_KEY).unwrap();
    let range = DateRange::parse("2026-10-01", "2026-10-16").unwrap();

    assert!(matches!(
        client.transactions_in_range(&range).await,
        Err(ClientError::Unauthorized)
    ));
}

#[tokio::test]
async fn insert_asks_for_the_stored_row() {
    let (client, seen) = signed_in_client().await;
    let row = TransactionInsert {
        title: "Pay".to_string(),
        amount: 2500.0,
        category: "Salary".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        kind: TransactionKind::Income,
        user_id: USER_ID.parse().unwrap(),
    };

    let stored = client.transaction_insert(&row).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].kind, TransactionKind::Income);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.prefer.as_deref(), Some("return=representation"));
    assert_eq!(seen.bodies[0]["type"], "income");
    assert_eq!(seen.bodies[0]["user_id"], USER_ID);
}

#[tokio::test]
async fn delete_filters_by_id() {
    let (client, seen) = signed_in_client().await;
    let id: Uuid = "3f1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f60".parse().unwrap();

    client.transaction_delete(id).await.unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.queries[0], format!("id=eq.{id}"));
}

#[tokio::test]
async fn categories_are_ordered_by_name() {
    let (client, _) = signed_in_client().await;
    assert!(client.categories_list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_rename_is_a_conflict() {
    let (client, _) = signed_in_client().await;
    match client.category_rename(Uuid::new_v4(), "Food").await {
        Err(ClientError::Conflict(msg)) => assert_eq!(msg, "duplicate key value"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn current_user_reads_the_token_owner() {
    let (client, _) = signed_in_client().await;
    let user = client.current_user().await.unwrap();
    assert_eq!(user.id.to_string(), USER_ID);
    assert_eq!(user.email.as_deref(), Some(USER_EMAIL));
}

#[tokio::test]
async fn expired_token_fails_current_user() {
    let (client, seen) = signed_in_client().await;
    seen.lock().unwrap().expired = true;
    assert!(matches!(
        client.current_user().await,
        Err(ClientError::Unauthorized)
    ));
}

#[tokio::test]
async fn sign_out_revokes_the_session() {
    let (client, seen) = signed_in_client().await;
    client.sign_out().await.unwrap();
    assert_eq!(seen.lock().unwrap().logouts, 1);
}

#[tokio::test]
async fn sign_out_without_token_is_unauthorized() {
    let (base_url, seen) = spawn_backend().await;
    let client = Client::new(&base_url, ANON_KEY).unwrap();
    assert!(matches!(client.sign_out().await, Err(ClientError::Unauthorized)));
    assert_eq!(seen.lock().unwrap().logouts, 0);
}

#[tokio::test]
async fn category_insert_sends_every_row() {
    let (client, seen) = signed_in_client().await;
    let user_id: Uuid = USER_ID.parse().unwrap();
    let rows = vec![
        CategoryInsert::new(NewCategory::parse("Rent", TransactionKind::Expense).unwrap(), user_id),
        CategoryInsert::new(NewCategory::parse("Gift", TransactionKind::Income).unwrap(), user_id),
    ];

    client.categories_insert(&rows).await.unwrap();
    {
        let seen = seen.lock().unwrap();
        assert_eq!(seen.category_inserts.len(), 2);
        assert_eq!(seen.category_inserts[0]["name"], "Rent");
        assert_eq!(seen.category_inserts[0]["type"], "expense");
        assert_eq!(seen.category_inserts[1]["type"], "income");
        assert_eq!(seen.category_inserts[1]["user_id"], USER_ID);
    }

    let names: Vec<String> = client
        .categories_list()
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, vec!["Gift", "Rent"]);
}

#[tokio::test]
async fn category_delete_filters_by_id() {
    let (client, seen) = signed_in_client().await;
    let id = Uuid::new_v4();

    client.category_delete(id).await.unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.queries, vec![format!("id=eq.{id}")]);
}
