//! Just enough of a Mastodon client to post one status.

use reqwest::Client;

use crate::error::Error;

pub struct Mastodon {
    base_url: String,
    access_token: String,
}

impl Mastodon {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Mastodon {
            base_url: base_url.to_string(),
            access_token: access_token.to_string(),
        }
    }

    pub async fn post_status(&self, status: &str, visibility: &str) -> Result<(), Error> {
        let client = Client::new();
        client
            .post(&format!("{}/api/v1/statuses", self.base_url))
            .bearer_auth(&self.access_token)
            .form(&[("status", status), ("visibility", visibility)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
