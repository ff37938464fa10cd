//! Account balance query.

use crate::error::Result;

use super::{Balance, PixelLabClient};

impl PixelLabClient {
    /// Fetch the remaining account credit in USD.
    pub async fn get_balance(&self) -> Result<Balance> {
        self.get_json("/balance").await
    }
}
