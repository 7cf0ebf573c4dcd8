//! PostgreSQL unit of work and repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{LikeExpr, Query};
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbConn, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use board_core::domain::{Comment, Like, Page, PageRequest, Post, Tag};
use board_core::error::RepoError;
use board_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostFilter, PostRepository, TagRepository,
    Transaction, UnitOfWork,
};

use super::connections::{DatabaseConfig, connect};
use super::entity::{comment, like, post, tag};
use super::postgres_base::{self as base, db_error};

/// PostgreSQL-backed unit of work.
pub struct PostgresStore {
    db: DbConn,
}

impl PostgresStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        Ok(Self::new(connect(config).await?))
    }
}

/// `LIKE` pattern matching `needle` anywhere, with its wildcards taken literally.
pub(crate) fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

fn transaction_error(e: DbErr) -> RepoError {
    RepoError::Transaction(e.to_string())
}

#[async_trait]
impl UnitOfWork for PostgresStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let txn = self.db.begin().await.map_err(transaction_error)?;
        Ok(Box::new(PostgresSession::new(txn)))
    }

    async fn read_only(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let txn = self
            .db
            .begin_with_config(None, Some(AccessMode::ReadOnly))
            .await
            .map_err(transaction_error)?;
        Ok(Box::new(PostgresSession::new(txn)))
    }
}

/// One database transaction. SeaORM rolls it back when dropped uncommitted.
pub struct PostgresSession {
    txn: DatabaseTransaction,
}

impl PostgresSession {
    pub fn new(txn: DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl Transaction for PostgresSession {
    fn posts(&self) -> &dyn PostRepository {
        self
    }

    fn comments(&self) -> &dyn CommentRepository {
        self
    }

    fn tags(&self) -> &dyn TagRepository {
        self
    }

    fn likes(&self) -> &dyn LikeRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        self.txn.commit().await.map_err(transaction_error)
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for PostgresSession {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        base::find_by_id::<post::Entity, _, _>(&self.txn, id).await
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        base::save::<post::Entity, _, _>(&self.txn, entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        tracing::debug!(post_id = id, "Deleting post with its comments, tags and likes");

        comment::Entity::delete_many()
            .filter(comment::Column::PostId.eq(id))
            .exec(&self.txn)
            .await
            .map_err(db_error)?;
        tag::Entity::delete_many()
            .filter(tag::Column::PostId.eq(id))
            .exec(&self.txn)
            .await
            .map_err(db_error)?;
        like::Entity::delete_many()
            .filter(like::Column::PostId.eq(id))
            .exec(&self.txn)
            .await
            .map_err(db_error)?;

        base::delete::<post::Entity, _>(&self.txn, id).await
    }
}

#[async_trait]
impl PostRepository for PostgresSession {
    async fn find_page(
        &self,
        filter: &PostFilter,
        request: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        let mut select = post::Entity::find();
        if let Some(title) = &filter.title {
            select = select.filter(post::Column::Title.like(contains_pattern(title)));
        }
        if let Some(created_by) = &filter.created_by {
            select = select.filter(post::Column::CreatedBy.eq(created_by.as_str()));
        }
        if let Some(tag_name) = &filter.tag {
            select = select.filter(
                post::Column::Id.in_subquery(
                    Query::select()
                        .column(tag::Column::PostId)
                        .from(tag::Entity)
                        .and_where(tag::Column::Name.eq(tag_name.as_str()))
                        .to_owned(),
                ),
            );
        }

        let paginator = select
            .order_by_desc(post::Column::Id)
            .paginate(&self.txn, request.size);
        let total = paginator.num_items().await.map_err(db_error)?;
        let models = paginator.fetch_page(request.page).await.map_err(db_error)?;

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            request,
            total,
        ))
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for PostgresSession {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        base::find_by_id::<comment::Entity, _, _>(&self.txn, id).await
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        base::save::<comment::Entity, _, _>(&self.txn, entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        base::delete::<comment::Entity, _>(&self.txn, id).await
    }
}

#[async_trait]
impl CommentRepository for PostgresSession {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.txn)
            .await
            .map_err(db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl BaseRepository<Tag, i64> for PostgresSession {
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, RepoError> {
        base::find_by_id::<tag::Entity, _, _>(&self.txn, id).await
    }

    async fn save(&self, entity: Tag) -> Result<Tag, RepoError> {
        base::save::<tag::Entity, _, _>(&self.txn, entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        base::delete::<tag::Entity, _>(&self.txn, id).await
    }
}

#[async_trait]
impl TagRepository for PostgresSession {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError> {
        let result = tag::Entity::find()
            .filter(tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Id)
            .all(&self.txn)
            .await
            .map_err(db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace_all(
        &self,
        post_id: i64,
        names: &[String],
        created_by: &str,
    ) -> Result<Vec<Tag>, RepoError> {
        tag::Entity::delete_many()
            .filter(tag::Column::PostId.eq(post_id))
            .exec(&self.txn)
            .await
            .map_err(db_error)?;

        // One insert per tag keeps ids in list order.
        let mut saved = Vec::with_capacity(names.len());
        for name in names {
            let model = tag::ActiveModel::from(Tag::new(post_id, name.as_str(), created_by))
                .insert(&self.txn)
                .await
                .map_err(db_error)?;
            saved.push(model.into());
        }

        Ok(saved)
    }

    async fn first_tags(&self, post_ids: &[i64]) -> Result<HashMap<i64, String>, RepoError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tags = tag::Entity::find()
            .filter(tag::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(tag::Column::Id)
            .all(&self.txn)
            .await
            .map_err(db_error)?;

        let mut first = HashMap::new();
        for tag in tags {
            first.entry(tag.post_id).or_insert(tag.name);
        }
        Ok(first)
    }
}

#[async_trait]
impl BaseRepository<Like, i64> for PostgresSession {
    async fn find_by_id(&self, id: i64) -> Result<Option<Like>, RepoError> {
        base::find_by_id::<like::Entity, _, _>(&self.txn, id).await
    }

    async fn save(&self, entity: Like) -> Result<Like, RepoError> {
        base::save::<like::Entity, _, _>(&self.txn, entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        base::delete::<like::Entity, _>(&self.txn, id).await
    }
}

#[async_trait]
impl LikeRepository for PostgresSession {
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError> {
        let count = like::Entity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(&self.txn)
            .await
            .map_err(db_error)?;

        Ok(count as i64)
    }
}
