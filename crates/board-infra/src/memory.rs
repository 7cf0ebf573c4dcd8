//! In-memory board store - used when no database is configured, and in tests.
//!
//! A write transaction holds the store's write lock from `begin` until it is
//! committed or dropped, and works on a private copy of the state. Commit
//! swaps the copy in; dropping discards it. Read-only scopes work on a
//! snapshot and never hold the lock.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock, RwLockWriteGuard};

use board_core::domain::{Comment, Like, Page, PageRequest, Post, Tag, UNSAVED_ID};
use board_core::error::RepoError;
use board_core::ports::{
    BaseRepository, CommentRepository, LikeRepository, PostFilter, PostRepository, TagRepository,
    Transaction, UnitOfWork,
};

#[derive(Debug, Clone, Default)]
struct BoardState {
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    tags: BTreeMap<i64, Tag>,
    likes: BTreeMap<i64, Like>,
    last_id: i64,
}

impl BoardState {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn tag_names(&self, post_id: i64) -> Vec<String> {
        self.tags
            .values()
            .filter(|tag| tag.post_id == post_id)
            .map(|tag| tag.name.clone())
            .collect()
    }

    fn require_post(&self, post_id: i64) -> Result<(), RepoError> {
        if self.posts.contains_key(&post_id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!("post {post_id} does not exist")))
        }
    }
}

/// A table of the in-memory state.
trait Stored: Clone + Send + Sync + 'static {
    fn rows(state: &BoardState) -> &BTreeMap<i64, Self>;

    fn table(state: &mut BoardState) -> &mut BTreeMap<i64, Self>;

    fn id_mut(&mut self) -> &mut i64;

    /// Foreign key checks run before insert or update.
    fn check_references(&self, _state: &BoardState) -> Result<(), RepoError> {
        Ok(())
    }

    /// Rows owned by the deleted one.
    fn cascade(_state: &mut BoardState, _id: i64) {}
}

impl Stored for Post {
    fn rows(state: &BoardState) -> &BTreeMap<i64, Self> {
        &state.posts
    }

    fn table(state: &mut BoardState) -> &mut BTreeMap<i64, Self> {
        &mut state.posts
    }

    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn cascade(state: &mut BoardState, id: i64) {
        state.comments.retain(|_, comment| comment.post_id != id);
        state.tags.retain(|_, tag| tag.post_id != id);
        state.likes.retain(|_, like| like.post_id != id);
    }
}

impl Stored for Comment {
    fn rows(state: &BoardState) -> &BTreeMap<i64, Self> {
        &state.comments
    }

    fn table(state: &mut BoardState) -> &mut BTreeMap<i64, Self> {
        &mut state.comments
    }

    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn check_references(&self, state: &BoardState) -> Result<(), RepoError> {
        state.require_post(self.post_id)
    }
}

impl Stored for Tag {
    fn rows(state: &BoardState) -> &BTreeMap<i64, Self> {
        &state.tags
    }

    fn table(state: &mut BoardState) -> &mut BTreeMap<i64, Self> {
        &mut state.tags
    }

    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn check_references(&self, state: &BoardState) -> Result<(), RepoError> {
        state.require_post(self.post_id)
    }
}

impl Stored for Like {
    fn rows(state: &BoardState) -> &BTreeMap<i64, Self> {
        &state.likes
    }

    fn table(state: &mut BoardState) -> &mut BTreeMap<i64, Self> {
        &mut state.likes
    }

    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn check_references(&self, state: &BoardState) -> Result<(), RepoError> {
        state.require_post(self.post_id)
    }
}

/// In-memory implementation of the board's unit of work.
///
/// Note: Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<BoardState>>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnitOfWork for InMemoryBoardStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let guard = Arc::clone(&self.state).write_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryTransaction {
            working: RwLock::new(working),
            guard: Some(guard),
        }))
    }

    async fn read_only(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let snapshot = self.state.read().await.clone();
        Ok(Box::new(InMemoryTransaction {
            working: RwLock::new(snapshot),
            guard: None,
        }))
    }
}

/// Transaction over a private copy of the store's state.
pub struct InMemoryTransaction {
    working: RwLock<BoardState>,
    /// `None` for read-only scopes.
    guard: Option<OwnedRwLockWriteGuard<BoardState>>,
}

impl InMemoryTransaction {
    async fn writable(&self) -> Result<RwLockWriteGuard<'_, BoardState>, RepoError> {
        if self.guard.is_none() {
            return Err(RepoError::Transaction(
                "write attempted in a read-only transaction".to_string(),
            ));
        }
        Ok(self.working.write().await)
    }
}

#[async_trait]
impl Transaction for InMemoryTransaction {
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
        let InMemoryTransaction { working, guard } = *self;
        if let Some(mut guard) = guard {
            *guard = working.into_inner();
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Stored> BaseRepository<T, i64> for InMemoryTransaction {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        let state = self.working.read().await;
        Ok(T::rows(&state).get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        let mut state = self.writable().await?;
        entity.check_references(&state)?;

        let id = *entity.id_mut();
        if id == UNSAVED_ID {
            *entity.id_mut() = state.next_id();
        } else if !T::table(&mut state).contains_key(&id) {
            return Err(RepoError::NotFound);
        }

        let id = *entity.id_mut();
        T::table(&mut state).insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut state = self.writable().await?;
        if T::table(&mut state).remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        T::cascade(&mut state, id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryTransaction {
    async fn find_page(
        &self,
        filter: &PostFilter,
        request: PageRequest,
    ) -> Result<Page<Post>, RepoError> {
        let state = self.working.read().await;
        let matching: Vec<&Post> = state
            .posts
            .values()
            .rev()
            .filter(|post| filter.matches(post, &state.tag_names(post.id)))
            .collect();

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }
}

#[async_trait]
impl CommentRepository for InMemoryTransaction {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let state = self.working.read().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| (comment.created_at, comment.id));
        Ok(comments)
    }
}

#[async_trait]
impl TagRepository for InMemoryTransaction {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, RepoError> {
        let state = self.working.read().await;
        Ok(state
            .tags
            .values()
            .filter(|tag| tag.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn replace_all(
        &self,
        post_id: i64,
        names: &[String],
        created_by: &str,
    ) -> Result<Vec<Tag>, RepoError> {
        let mut state = self.writable().await?;
        state.require_post(post_id)?;
        state.tags.retain(|_, tag| tag.post_id != post_id);

        let mut saved = Vec::with_capacity(names.len());
        for name in names {
            let mut tag = Tag::new(post_id, name.as_str(), created_by);
            tag.id = state.next_id();
            state.tags.insert(tag.id, tag.clone());
            saved.push(tag);
        }
        Ok(saved)
    }

    async fn first_tags(&self, post_ids: &[i64]) -> Result<HashMap<i64, String>, RepoError> {
        let wanted: HashSet<i64> = post_ids.iter().copied().collect();
        let state = self.working.read().await;

        let mut first = HashMap::new();
        for tag in state.tags.values().filter(|tag| wanted.contains(&tag.post_id)) {
            first.entry(tag.post_id).or_insert_with(|| tag.name.clone());
        }
        Ok(first)
    }
}

#[async_trait]
impl LikeRepository for InMemoryTransaction {
    async fn count_by_post_id(&self, post_id: i64) -> Result<i64, RepoError> {
        let state = self.working.read().await;
        Ok(state
            .likes
            .values()
            .filter(|like| like.post_id == post_id)
            .count() as i64)
    }
}
