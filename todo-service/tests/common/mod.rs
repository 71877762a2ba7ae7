#![allow(dead_code)]

pub mod db;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;
use todo_service::domain::identity::ports::Clock;
use todo_service::domain::identity::ports::IdentityRepository;
use todo_service::domain::identity::AuthenticationService;
use todo_service::domain::identity::IdentityResolver;
use todo_service::domain::page::Page;
use todo_service::domain::todo::errors::TodoError;
use todo_service::domain::todo::models::NewTodo;
use todo_service::domain::todo::models::Todo;
use todo_service::domain::todo::models::TodoFilter;
use todo_service::domain::todo::models::TodoId;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::errors::UserError;
use todo_service::domain::user::models::NewUser;
use todo_service::domain::user::models::User;
use todo_service::domain::user::models::UserId;
use todo_service::domain::user::ports::UserRepository;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::inbound::http::router::AppState;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub clock: Arc<TestClock>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp.
    ///
    /// The clock starts at 2024-01-01 12:00:00 UTC and only moves when a test
    /// moves it.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryRepository::default());
        let clock = Arc::new(TestClock::new(noon()));
        let authenticator = Arc::new(Authenticator::new(
            TEST_SECRET,
            Duration::minutes(TOKEN_TTL_MINUTES),
        ));

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::clone(&repository))),
            todo_service: Arc::new(TodoService::new(Arc::clone(&repository))),
            authentication_service: Arc::new(AuthenticationService::new(
                Arc::clone(&repository),
                Arc::clone(&authenticator),
            )),
            identity_resolver: Arc::new(IdentityResolver::new(
                Arc::clone(&repository),
                Arc::clone(&authenticator),
            )),
            clock: clock.clone(),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            clock,
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(&format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a user and return the response body.
    pub async fn create_user(&self, username: &str, email: &str, password: &str) -> Value {
        let response = self
            .post("/users/")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in through the token endpoint.
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the bearer token.
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Register a user and log them in. Returns (user id, token).
    pub async fn user_with_token(&self, username: &str, password: &str) -> (i64, String) {
        let user = self
            .create_user(username, &format!("{}@test.com", username), password)
            .await;
        let token = self.token_for(username, password).await;
        (user["id"].as_i64().expect("id missing"), token)
    }
}

pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Clock the tests move by hand.
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
struct Store {
    users: BTreeMap<i64, User>,
    todos: BTreeMap<i64, Todo>,
    last_user_id: i64,
    last_todo_id: i64,
}

/// In-memory stand-in for the Postgres repositories.
///
/// Ids start at 1 and uniqueness of username and email is enforced the way
/// the table constraints would.
#[derive(Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
}

/// Same predicate the Postgres listing applies: substring on title and
/// description, exact state.
fn filter_matches(filter: &TodoFilter, todo: &Todo) -> bool {
    filter
        .title
        .as_deref()
        .map_or(true, |title| todo.title.contains(title))
        && filter
            .description
            .as_deref()
            .map_or(true, |description| todo.description.contains(description))
        && filter.state.map_or(true, |state| todo.state == state)
}

fn paged<T>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut store = self.store.lock().unwrap();

        if store.users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        if store.users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        store.last_user_id += 1;
        let created = User {
            id: UserId(store.last_user_id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        store.users.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.store.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<User>, UserError> {
        let store = self.store.lock().unwrap();
        Ok(paged(store.users.values().cloned(), page))
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut store = self.store.lock().unwrap();

        if store.users.values().any(|u| {
            u.id != user.id && (u.username == user.username || u.email == user.email)
        }) {
            return Err(UserError::AlreadyExists);
        }

        match store.users.get_mut(&user.id.0) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound(user.id)),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), UserError> {
        let mut store = self.store.lock().unwrap();

        store
            .users
            .remove(&id.0)
            .ok_or(UserError::NotFound(id))?;
        store.todos.retain(|_, todo| todo.user_id != id);

        Ok(())
    }
}

#[async_trait]
impl IdentityRepository for InMemoryRepository {
    async fn find_identity_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .users
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_identity_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.store.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn find_identity_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UserError> {
        let store = self.store.lock().unwrap();
        let by_username = store
            .users
            .values()
            .find(|u| u.username.as_str() == username);
        let by_email = store.users.values().find(|u| u.email.as_str() == email);

        Ok(by_username.or(by_email).cloned())
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        let mut store = self.store.lock().unwrap();

        store.last_todo_id += 1;
        let created = Todo {
            id: TodoId(store.last_todo_id),
            title: todo.title,
            description: todo.description,
            state: todo.state,
            user_id: todo.user_id,
            created_at: todo.created_at,
            updated_at: todo.created_at,
        };
        store.todos.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        Ok(self.store.lock().unwrap().todos.get(&id.0).cloned())
    }

    async fn list_by_owner(
        &self,
        owner_id: UserId,
        filter: &TodoFilter,
    ) -> Result<Vec<Todo>, TodoError> {
        let store = self.store.lock().unwrap();
        let matching = store
            .todos
            .values()
            .filter(|todo| todo.user_id == owner_id && filter_matches(filter, todo))
            .cloned();

        Ok(paged(matching, filter.page))
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut store = self.store.lock().unwrap();

        match store.todos.get_mut(&todo.id.0) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(todo)
            }
            None => Err(TodoError::NotFound(todo.id)),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        self.store
            .lock()
            .unwrap()
            .todos
            .remove(&id.0)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}
