use async_trait::async_trait;

use crate::domain::identity::AuthContext;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoPatch;
use crate::domain::user::models::UserId;
use crate::todo::errors::TodoError;

/// Port for to-do domain service operations.
///
/// Every operation acts on behalf of an authenticated caller and only ever
/// exposes that caller's to-dos.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a to-do owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(
        &self,
        context: &AuthContext,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// List the caller's to-dos matching `filter`, ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(
        &self,
        context: &AuthContext,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - No to-do with this id
    /// * `Auth(Forbidden)` - The to-do belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_todo(&self, context: &AuthContext, id: TodoId) -> Result<Todo, TodoError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - No to-do with this id
    /// * `Auth(Forbidden)` - The to-do belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn patch_todo(
        &self,
        context: &AuthContext,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - No to-do with this id
    /// * `Auth(Forbidden)` - The to-do belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, context: &AuthContext, id: TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for to-dos.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;

    /// One page of the owner's to-dos matching `filter`, ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(
        &self,
        owner_id: UserId,
        filter: &TodoFilter,
    ) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - To-do does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// # Errors
    /// * `NotFound` - To-do does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
