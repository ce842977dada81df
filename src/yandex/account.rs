use crate::{error::Result, types::AccountSettings, yandex::ApiClient};

impl ApiClient {
    /// Retrieves the account settings of the token's owner.
    ///
    /// Used at startup to resolve the numeric user id when none is
    /// configured; user-scoped calls need it in their paths.
    ///
    /// # Example
    ///
    /// ```
    /// let settings = client.account_settings().await?;
    /// client.set_user_id(settings.uid);
    /// ```
    pub async fn account_settings(&self) -> Result<AccountSettings> {
        self.get("account/settings").await
    }
}
