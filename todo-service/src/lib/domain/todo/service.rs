use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::AuthContext;
use crate::domain::identity::AuthorizationPolicy;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoPatch;
use crate::todo::errors::TodoError;
use crate::todo::ports::TodoRepository;
use crate::todo::ports::TodoServicePort;

/// Domain service implementation for to-do operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    /// Load a to-do and check the caller owns it.
    async fn owned_todo(&self, context: &AuthContext, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))?;

        AuthorizationPolicy::ensure_can_modify(context, todo.user_id)?;

        Ok(todo)
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        context: &AuthContext,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let todo = NewTodo {
            title: command.title,
            description: command.description,
            state: command.state,
            user_id: context.user_id(),
            created_at: Utc::now(),
        };

        let created = self.repository.create(todo).await?;
        tracing::info!(todo_id = %created.id, user_id = %created.user_id, "Todo created");

        Ok(created)
    }

    async fn list_todos(
        &self,
        context: &AuthContext,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, TodoError> {
        self.repository
            .list_by_owner(context.user_id(), &filter)
            .await
    }

    async fn get_todo(&self, context: &AuthContext, id: TodoId) -> Result<Todo, TodoError> {
        self.owned_todo(context, id).await
    }

    async fn patch_todo(
        &self,
        context: &AuthContext,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Todo, TodoError> {
        let mut todo = self.owned_todo(context, id).await?;
        todo.apply(patch, Utc::now());

        let updated = self.repository.update(todo).await?;
        tracing::info!(todo_id = %updated.id, "Todo updated");

        Ok(updated)
    }

    async fn delete_todo(&self, context: &AuthContext, id: TodoId) -> Result<(), TodoError> {
        let todo = self.owned_todo(context, id).await?;

        self.repository.delete(todo.id).await?;
        tracing::info!(todo_id = %id, "Todo deleted");

        Ok(())
    }
}
