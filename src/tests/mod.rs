#[cfg(test)]
pub mod test {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use once_cell::sync::Lazy;
    use serde_json::{json, Value};

    use crate::cache::LocalCache;
    use crate::client::{ExpenseClient, ExpenseStore};
    use crate::error::AppError as Error;
    use crate::model::{Expense, ExpenseId, NewExpense};
    use crate::notify::Notifier;
    use crate::telemetry::{get_subscriber, init_subscriber};

    // Ensure that the `tracing` stack is only initialised once using `once_cell`
    static TRACING: Lazy<()> = Lazy::new(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();
        // We cannot assign the output of `get_subscriber` to a variable based on the
        // value TEST_LOG` because the sink is part of the type returned by
        // `get_subscriber`, therefore they are not the same type.
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            init_subscriber(subscriber).expect("Failed to initialise tracing");
        } else {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            init_subscriber(subscriber).expect("Failed to initialise tracing");
        };
    });

    pub fn get_client(base_url: &str) -> ExpenseClient {
        Lazy::force(&TRACING);

        match ExpenseClient::new(base_url) {
            Ok(client) => client,
            Err(_) => panic!("Error creating client"),
        }
    }

    pub fn expense(id: &str, name: &str, amount: &str, category: &str) -> Expense {
        Expense {
            id: id.into(),
            name: name.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
        }
    }

    // -- Fake REST backend ----------------------------------------------------------------

    /// A mutating request as received by the fake backend
    #[derive(Debug, Clone, PartialEq)]
    pub enum Request {
        Create(Value),
        Update(String, Value),
        Delete(String),
    }

    #[derive(Debug, Default)]
    struct Backend {
        expenses: Vec<Value>,
        requests: Vec<Request>,
        next_id: u64,
        failing: bool,
    }

    type SharedBackend = Arc<Mutex<Backend>>;

    /// An in-process `/expenses` server on an ephemeral port
    #[derive(Debug, Clone)]
    pub struct FakeBackend {
        pub base_url: String,
        state: SharedBackend,
    }

    impl FakeBackend {
        pub fn requests(&self) -> Vec<Request> {
            self.state.lock().unwrap().requests.clone()
        }

        /// Answer every request with a 500 from now on
        pub fn fail_all(&self) {
            self.state.lock().unwrap().failing = true;
        }
    }

    pub async fn spawn_backend(expenses: Vec<Value>) -> FakeBackend {
        Lazy::force(&TRACING);

        let state = Arc::new(Mutex::new(Backend {
            next_id: expenses.len() as u64 + 1,
            expenses,
            ..Backend::default()
        }));

        let app = Router::new()
            .route("/expenses", get(list_expenses).post(create_expense))
            .route("/expenses/:id", put(update_expense).delete(delete_expense))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeBackend {
            base_url: format!("http://{addr}/"),
            state,
        }
    }

    fn id_of(expense: &Value) -> String {
        match &expense["id"] {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }

    async fn list_expenses(State(state): State<SharedBackend>) -> Response {
        let backend = state.lock().unwrap();
        if backend.failing {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Json(backend.expenses.clone()).into_response()
    }

    async fn create_expense(
        State(state): State<SharedBackend>,
        Json(body): Json<Value>,
    ) -> Response {
        let mut backend = state.lock().unwrap();
        backend.requests.push(Request::Create(body.clone()));
        if backend.failing {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        let mut expense = body;
        expense["id"] = json!(backend.next_id);
        backend.next_id += 1;
        backend.expenses.push(expense.clone());

        (StatusCode::CREATED, Json(expense)).into_response()
    }

    async fn update_expense(
        State(state): State<SharedBackend>,
        Path(id): Path<String>,
        Json(body): Json<Value>,
    ) -> Response {
        let mut backend = state.lock().unwrap();
        backend.requests.push(Request::Update(id.clone(), body.clone()));
        if backend.failing {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        match backend.expenses.iter_mut().find(|e| id_of(e) == id) {
            Some(expense) => {
                let stored_id = expense["id"].clone();
                *expense = body;
                expense["id"] = stored_id;
                Json(expense.clone()).into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn delete_expense(State(state): State<SharedBackend>, Path(id): Path<String>) -> Response {
        let mut backend = state.lock().unwrap();
        backend.requests.push(Request::Delete(id.clone()));
        if backend.failing {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        let before = backend.expenses.len();
        backend.expenses.retain(|e| id_of(e) != id);
        if backend.expenses.len() == before {
            return StatusCode::NOT_FOUND.into_response();
        }
        StatusCode::OK.into_response()
    }

    // -- Controller doubles ---------------------------------------------------------------

    /// A call made on the [`MockStore`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List,
        Create(NewExpense),
        Update(ExpenseId, NewExpense),
        Delete(ExpenseId),
    }

    #[derive(Debug, Default)]
    struct Store {
        expenses: Vec<Expense>,
        calls: Vec<Call>,
        next_id: u64,
        fail_list: bool,
        fail_create: bool,
        fail_update: bool,
        fail_delete: bool,
    }

    /// In-memory remote store that records every call
    #[derive(Debug, Clone, Default)]
    pub struct MockStore {
        inner: Arc<Mutex<Store>>,
    }

    impl MockStore {
        pub fn new(expenses: Vec<Expense>) -> Self {
            let next_id = 100 + expenses.len() as u64;
            Self {
                inner: Arc::new(Mutex::new(Store {
                    expenses,
                    next_id,
                    ..Store::default()
                })),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.inner.lock().unwrap().calls.clone()
        }

        pub fn fail_list(&self) {
            self.inner.lock().unwrap().fail_list = true;
        }

        pub fn fail_create(&self) {
            self.inner.lock().unwrap().fail_create = true;
        }

        pub fn fail_update(&self) {
            self.inner.lock().unwrap().fail_update = true;
        }

        pub fn fail_delete(&self) {
            self.inner.lock().unwrap().fail_delete = true;
        }
    }

    #[async_trait]
    impl ExpenseStore for MockStore {
        async fn list(&self) -> Result<Vec<Expense>, Error> {
            let mut store = self.inner.lock().unwrap();
            store.calls.push(Call::List);
            if store.fail_list {
                return Err(Error::FetchFailed);
            }
            Ok(store.expenses.clone())
        }

        async fn create(&self, expense: &NewExpense) -> Result<(), Error> {
            let mut store = self.inner.lock().unwrap();
            store.calls.push(Call::Create(expense.clone()));
            if store.fail_create {
                return Err(Error::CreateFailed);
            }

            let id = store.next_id.to_string();
            store.next_id += 1;
            store.expenses.push(Expense {
                id: id.into(),
                name: expense.name.clone(),
                amount: expense.amount.clone(),
                category: expense.category.to_string(),
            });
            Ok(())
        }

        async fn update(&self, id: &ExpenseId, expense: &NewExpense) -> Result<(), Error> {
            let mut store = self.inner.lock().unwrap();
            store.calls.push(Call::Update(id.clone(), expense.clone()));
            if store.fail_update {
                return Err(Error::UpdateFailed);
            }

            let existing = store
                .expenses
                .iter_mut()
                .find(|e| &e.id == id)
                .ok_or(Error::UpdateFailed)?;
            existing.name = expense.name.clone();
            existing.amount = expense.amount.clone();
            existing.category = expense.category.to_string();
            Ok(())
        }

        async fn delete(&self, id: &ExpenseId) -> Result<(), Error> {
            let mut store = self.inner.lock().unwrap();
            store.calls.push(Call::Delete(id.clone()));
            if store.fail_delete {
                return Err(Error::DeleteFailed);
            }
            store.expenses.retain(|e| &e.id != id);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct Snapshot {
        expenses: Option<Vec<Expense>>,
        corrupt: bool,
        fail_writes: bool,
    }

    /// Cache kept in memory, shared between clones
    #[derive(Debug, Clone, Default)]
    pub struct MemoryCache {
        inner: Arc<Mutex<Snapshot>>,
    }

    impl MemoryCache {
        pub fn new(expenses: Option<Vec<Expense>>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(Snapshot {
                    expenses,
                    ..Snapshot::default()
                })),
            }
        }

        pub fn snapshot(&self) -> Option<Vec<Expense>> {
            self.inner.lock().unwrap().expenses.clone()
        }

        pub fn corrupt(&self) {
            self.inner.lock().unwrap().corrupt = true;
        }

        pub fn fail_writes(&self) {
            self.inner.lock().unwrap().fail_writes = true;
        }
    }

    impl LocalCache for MemoryCache {
        fn load(&self) -> Result<Option<Vec<Expense>>, Error> {
            let snapshot = self.inner.lock().unwrap();
            if snapshot.corrupt {
                return Err(Error::CacheError("corrupt snapshot".to_string()));
            }
            Ok(snapshot.expenses.clone())
        }

        fn store(&self, expenses: &[Expense]) -> Result<(), Error> {
            let mut snapshot = self.inner.lock().unwrap();
            if snapshot.fail_writes {
                return Err(Error::CacheError("disk full".to_string()));
            }
            snapshot.expenses = Some(expenses.to_vec());
            Ok(())
        }
    }

    /// Notifier that keeps every message it was given
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNotifier {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }
}
