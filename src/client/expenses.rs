//! Expense related functions
//!
//! This module reads and writes expenses through the REST endpoint.

use async_trait::async_trait;
use tracing_log::log::info;

use super::{ExpenseClient, ExpenseStore};
use crate::error::AppError as Error;
use crate::model::{Expense, ExpenseId, NewExpense};

#[async_trait]
impl ExpenseStore for ExpenseClient {
    /// GET /expenses
    ///
    /// # Errors
    /// Will return errors if the store can't be reached, answers with a non-success
    /// status, or sends a body that isn't a list of expenses.
    #[tracing::instrument(name = "List expenses", skip(self))]
    async fn list(&self) -> Result<Vec<Expense>, Error> {
        let url = self.expenses_url(None)?;
        info!("url: {}", url);

        let response = self.client.get(url).send().await?;
        Self::handle_response(response, Error::FetchFailed).await
    }

    /// POST /expenses
    #[tracing::instrument(name = "Create expense", skip(self, expense), fields(name = %expense.name))]
    async fn create(&self, expense: &NewExpense) -> Result<(), Error> {
        let url = self.expenses_url(None)?;
        info!("url: {}", url);

        let response = self.client.post(url).json(expense).send().await?;
        Self::ensure_success(response, Error::CreateFailed).await?;

        Ok(())
    }

    /// PUT /expenses/{id}
    #[tracing::instrument(name = "Update expense", skip(self, expense), fields(id = %id))]
    async fn update(&self, id: &ExpenseId, expense: &NewExpense) -> Result<(), Error> {
        let url = self.expenses_url(Some(id))?;
        info!("url: {}", url);

        let response = self.client.put(url).json(expense).send().await?;
        Self::ensure_success(response, Error::UpdateFailed).await?;

        Ok(())
    }

    /// DELETE /expenses/{id}
    #[tracing::instrument(name = "Delete expense", skip(self), fields(id = %id))]
    async fn delete(&self, id: &ExpenseId) -> Result<(), Error> {
        let url = self.expenses_url(Some(id))?;
        info!("url: {}", url);

        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response, Error::DeleteFailed).await?;

        Ok(())
    }
}

// -- Tests ----------------------------------------------------------------------------
