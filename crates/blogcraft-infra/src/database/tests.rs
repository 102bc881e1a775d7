#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use blogcraft_core::domain::{Post, STATUS_PUBLISHED};
    use blogcraft_core::error::RepoError;
    use blogcraft_core::ports::{
        PostChanges, PostQuery, PostRepository, PostSort, ProfileChanges, UserRepository,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};
    use uuid::Uuid;

    fn post_model(author_id: Uuid, title: &str, views: i32) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: Uuid::new_v4(),
            author_id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            category: "tech".to_owned(),
            tags: vec!["rust".to_owned()],
            status: STATUS_PUBLISHED.to_owned(),
            featured_image: String::new(),
            views,
            likes: 0,
            comments: 0,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn changes() -> PostChanges {
        PostChanges {
            title: "Updated".to_owned(),
            content: "Updated content".to_owned(),
            category: "tech".to_owned(),
            tags: Vec::new(),
            status: None,
            featured_image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let author_id = Uuid::new_v4();
        let model = post_model(author_id, "Test Post", 10);
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
        assert_eq!(found.author_id, author_id);
    }

    #[tokio::test]
    async fn test_list_builds_author_status_search_and_sort() {
        let author_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(author_id, "Rust post", 10)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db.clone());
        let query = PostQuery {
            status: Some(STATUS_PUBLISHED.to_owned()),
            search: Some("rust".to_owned()),
            sort: PostSort::Popular,
        };

        let posts = repo.list_for_author(author_id, &query).await.unwrap();
        assert_eq!(posts.len(), 1);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#""posts"."author_id""#));
        assert!(log.contains(r#""posts"."status" ="#));
        assert!(log.contains("ILIKE"));
        assert!(log.contains("array_to_string"));
        assert!(log.contains(r#"ORDER BY "posts"."views" DESC"#));
    }

    #[tokio::test]
    async fn test_list_status_all_disables_status_filter() {
        let author_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db.clone());
        let query = PostQuery {
            status: Some("all".to_owned()),
            search: None,
            sort: PostSort::Oldest,
        };

        repo.list_for_author(author_id, &query).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains(r#""posts"."status" ="#));
        assert!(log.contains(r#"ORDER BY "posts"."created_at" ASC"#));
    }

    #[tokio::test]
    async fn test_published_fetch_uses_deterministic_order() {
        let author_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db.clone());
        repo.published_for_author(author_id).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#""posts"."status" ="#));
        assert!(log.contains(r#"ORDER BY "posts"."created_at" ASC, "posts"."id" ASC"#));
    }

    #[tokio::test]
    async fn test_update_owned_omitted_status_is_not_written() {
        let author_id = Uuid::new_v4();
        let model = post_model(author_id, "Updated", 10);
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(db.clone());
        let updated = repo
            .update_owned(post_id, author_id, changes())
            .await
            .unwrap();

        assert!(updated.is_some());

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#""title" ="#));
        assert!(!log.contains(r#""status" ="#));
        // Scoped by both id and author.
        assert!(log.contains(r#""posts"."author_id""#));
    }

    #[tokio::test]
    async fn test_update_owned_supplied_status_is_written() {
        let author_id = Uuid::new_v4();
        let model = post_model(author_id, "Updated", 10);
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(db.clone());
        let updated = repo
            .update_owned(
                post_id,
                author_id,
                PostChanges {
                    status: Some("draft".to_owned()),
                    ..changes()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_some());

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#""status" ="#));
    }

    #[tokio::test]
    async fn test_delete_owned_reports_whether_a_row_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let id = Uuid::new_v4();
        let author_id = Uuid::new_v4();

        assert!(repo.delete_owned(id, author_id).await.unwrap());
        assert!(!repo.delete_owned(id, author_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_constraint() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"users_email_key\"".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresUserRepository::new(db);
        let result = repo
            .update_profile(
                Uuid::new_v4(),
                ProfileChanges {
                    email: Some("taken@example.com".to_owned()),
                    ..ProfileChanges::default()
                },
            )
            .await;

        match result {
            Err(RepoError::Constraint(msg)) => assert_eq!(msg, "Email already exists"),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_account_removes_posts_then_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 3,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repo = PostgresUserRepository::new(db.clone());
        repo.delete_account(Uuid::new_v4()).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        let posts_at = log.find(r#"DELETE FROM "posts""#).unwrap();
        let user_at = log.find(r#"DELETE FROM "users""#).unwrap();
        assert!(posts_at < user_at);
    }
}
