//! Form-and-list controller
//!
//! Holds the expense list, the draft form and the id of the expense being
//! edited, and keeps the remote store and the local cache in step with them.
//! Every operation catches its own errors and turns them into a notification;
//! nothing here is fatal.

use tracing_log::log::{info, warn};

use crate::cache::LocalCache;
use crate::client::ExpenseStore;
use crate::error::AppError as Error;
use crate::model::{self, Expense, ExpenseId};
use crate::notify::Notifier;

pub mod draft;

pub use draft::Draft;

/// Everything the form and the list render from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub draft: Draft,
    pub edit_id: Option<ExpenseId>,
}

pub struct Controller<S, C, N> {
    store: S,
    cache: C,
    notifier: N,
    state: AppState,
}

impl<S, C, N> Controller<S, C, N>
where
    S: ExpenseStore,
    C: LocalCache,
    N: Notifier,
{
    pub fn new(store: S, cache: C, notifier: N) -> Self {
        Self {
            store,
            cache,
            notifier,
            state: AppState::default(),
        }
    }

    // -- Read access ----------------------------------------------------------------------

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    pub fn edit_id(&self) -> Option<&ExpenseId> {
        self.state.edit_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.state.edit_id.is_some()
    }

    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.state.expenses.iter().find(|expense| &expense.id == id)
    }

    /// Sum of all amounts in the current list
    pub fn total(&self) -> f64 {
        model::total(&self.state.expenses)
    }

    /// The total rounded to two decimal places
    pub fn total_display(&self) -> String {
        model::format_amount(self.total())
    }

    // -- Draft ----------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.draft.name = name.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.state.draft.amount = amount.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.state.draft.category = category.into();
    }

    /// Start editing `expense`, replacing whatever draft was in progress.
    ///
    /// Nothing is sent to the store until the next submit.
    pub fn edit(&mut self, expense: &Expense) {
        self.state.draft = Draft::from_expense(expense);
        self.state.edit_id = Some(expense.id.clone());
    }

    /// Drop the draft and go back to adding a new expense
    pub fn cancel_edit(&mut self) {
        self.clear_draft();
    }

    // -- Load -----------------------------------------------------------------------------

    /// Show the cached snapshot, if any, until the store answers
    pub fn load_cached(&mut self) {
        match self.cache.load() {
            Ok(Some(expenses)) => {
                info!("Loaded {} cached expenses", expenses.len());
                self.set_expenses(expenses);
            }
            Ok(None) => info!("No cached expenses"),
            Err(e) => warn!("Ignoring unreadable cache: {}", e),
        }
    }

    /// Replace the list with the store's collection.
    ///
    /// On failure the current list stays as it is.
    #[tracing::instrument(name = "Refresh expenses", skip(self))]
    pub async fn refresh(&mut self) -> bool {
        match self.store.list().await {
            Ok(expenses) => {
                self.set_expenses(expenses);
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Startup: cached placeholder first, then the authoritative list
    pub async fn mount(&mut self) -> bool {
        self.load_cached();
        self.refresh().await
    }

    // -- Mutations ------------------------------------------------------------------------

    /// Create or update from the draft, then resynchronise from the store.
    ///
    /// The draft and edit id are only cleared once the store has accepted the
    /// change and the list has been fetched again.
    #[tracing::instrument(name = "Submit expense", skip(self))]
    pub async fn submit(&mut self) -> bool {
        match self.try_submit().await {
            Ok(()) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    async fn try_submit(&mut self) -> Result<(), Error> {
        let body = self.state.draft.validate()?;

        match &self.state.edit_id {
            Some(id) => self.store.update(id, &body).await?,
            None => self.store.create(&body).await?,
        }

        let expenses = self.store.list().await?;
        self.set_expenses(expenses);
        self.clear_draft();

        Ok(())
    }

    /// Delete from the store, then drop the entry from the local list.
    ///
    /// The list is not fetched again.
    #[tracing::instrument(name = "Remove expense", skip(self), fields(id = %id))]
    pub async fn delete(&mut self, id: &ExpenseId) -> bool {
        if let Err(e) = self.store.delete(id).await {
            self.report(&e);
            return false;
        }

        let mut expenses = std::mem::take(&mut self.state.expenses);
        expenses.retain(|expense| &expense.id != id);
        self.set_expenses(expenses);

        true
    }

    // -- Internals ------------------------------------------------------------------------

    // The only place the list changes; the cache always mirrors it
    fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.state.expenses = expenses;
        if let Err(e) = self.cache.store(&self.state.expenses) {
            warn!("Failed to mirror expenses to cache: {}", e);
        }
    }

    fn clear_draft(&mut self) {
        self.state.draft = Draft::default();
        self.state.edit_id = None;
    }

    pub(crate) fn report(&self, error: &Error) {
        info!("{}", error);
        self.notifier.error(&error.to_string());
    }
}

// -- Tests ----------------------------------------------------------------------------
