//! PostgreSQL repository implementations.
//!
//! Every post mutation is a single statement scoped by both id and author,
//! so an ownership check can never race past the write it guards. Account
//! deletion runs posts-then-user inside one transaction.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use blogcraft_core::domain::{Post, STATUS_PUBLISHED, User};
use blogcraft_core::error::RepoError;
use blogcraft_core::ports::{
    PostChanges, PostQuery, PostRepository, PostSort, ProfileChanges, UserRepository,
};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

fn query_err(e: sea_orm::DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Escape LIKE metacharacters so user input only ever matches literally,
/// then wrap in `%` for substring matching.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Case-insensitive substring match over title OR content OR any tag.
///
/// Tags are joined with a newline for the match; a pattern can only span
/// two tags if the search itself contains a newline.
fn search_condition(search: &str) -> Condition {
    let pattern = like_pattern(search);
    Condition::any()
        .add(Expr::col((post::Entity, post::Column::Title)).ilike(pattern.as_str()))
        .add(Expr::col((post::Entity, post::Column::Content)).ilike(pattern.as_str()))
        .add(Expr::cust_with_values(
            "array_to_string(tags, chr(10)) ILIKE ?",
            [pattern],
        ))
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_for_author(
        &self,
        author_id: Uuid,
        query: &PostQuery,
    ) -> Result<Vec<Post>, RepoError> {
        let mut condition = Condition::all().add(post::Column::AuthorId.eq(author_id));

        // "all" is a sentinel that disables the status filter.
        if let Some(status) = query.status.as_deref() {
            if status != "all" {
                condition = condition.add(post::Column::Status.eq(status));
            }
        }

        if let Some(search) = query.search.as_deref() {
            condition = condition.add(search_condition(search));
        }

        let select = PostEntity::find().filter(condition);
        let select = match query.sort {
            PostSort::Oldest => select.order_by_asc(post::Column::CreatedAt),
            PostSort::Popular => select.order_by_desc(post::Column::Views),
            PostSort::Newest => select.order_by_desc(post::Column::CreatedAt),
        };

        let rows = select.all(&self.db).await.map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn published_for_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        // Fixed order: aggregation tie-breaks depend on it.
        let rows = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .filter(post::Column::Status.eq(STATUS_PUBLISHED))
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn recent_for_author(&self, author_id: Uuid, limit: u64) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(query_err)?;

        Ok(model.into())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        let mut update = PostEntity::update_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::AuthorId.eq(author_id))
            .col_expr(post::Column::Title, Expr::value(changes.title))
            .col_expr(post::Column::Content, Expr::value(changes.content))
            .col_expr(post::Column::Category, Expr::value(changes.category))
            .col_expr(post::Column::Tags, Expr::value(changes.tags))
            .col_expr(
                post::Column::FeaturedImage,
                Expr::value(changes.featured_image),
            )
            .col_expr(post::Column::UpdatedAt, Expr::value(Utc::now()));

        // Omitted status preserves the stored value.
        if let Some(status) = changes.status {
            update = update.col_expr(post::Column::Status, Expr::value(status));
        }

        let mut rows = update
            .exec_with_returning(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.pop().map(Into::into))
    }

    async fn delete_owned(&self, id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn update_profile(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<User>, RepoError> {
        let mut update = UserEntity::update_many()
            .filter(user::Column::Id.eq(id))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(name) = changes.name {
            update = update.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(email) = changes.email {
            update = update.col_expr(user::Column::Email, Expr::value(email));
        }
        if let Some(bio) = changes.bio {
            update = update.col_expr(user::Column::Bio, Expr::value(bio));
        }
        if let Some(website) = changes.website {
            update = update.col_expr(user::Column::Website, Expr::value(website));
        }
        if let Some(location) = changes.location {
            update = update.col_expr(user::Column::Location, Expr::value(location));
        }
        if let Some(twitter) = changes.twitter {
            update = update.col_expr(user::Column::Twitter, Expr::value(twitter));
        }
        if let Some(linkedin) = changes.linkedin {
            update = update.col_expr(user::Column::Linkedin, Expr::value(linkedin));
        }
        if let Some(github) = changes.github {
            update = update.col_expr(user::Column::Github, Expr::value(github));
        }

        let mut rows = update.exec_with_returning(&self.db).await.map_err(|e| {
            let err = e.to_string();
            // users.email is the only unique column this statement can hit.
            if err.contains("duplicate") || err.contains("unique") {
                RepoError::Constraint("Email already exists".to_string())
            } else {
                RepoError::Query(err)
            }
        })?;

        Ok(rows.pop().map(Into::into))
    }

    async fn delete_account(&self, id: Uuid) -> Result<(), RepoError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let posts = PostEntity::delete_many()
                        .filter(post::Column::AuthorId.eq(id))
                        .exec(txn)
                        .await?;

                    UserEntity::delete_by_id(id).exec(txn).await?;

                    tracing::info!(
                        user_id = %id,
                        posts_removed = posts.rows_affected,
                        "Account deleted"
                    );
                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                sea_orm::TransactionError::Connection(e) => RepoError::Connection(e.to_string()),
                sea_orm::TransactionError::Transaction(e) => query_err(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
