//! Zendesk comment source.
//!
//! Fetches ticket comments through the Zendesk Support API v2, authenticating
//! with an API token. Comment authors are sideloaded with `include=users` so
//! each comment can be attributed to an email and a role without extra
//! requests.
//!
//! ## Endpoint
//!
//! `GET https://{subdomain}.zendesk.com/api/v2/tickets/{id}/comments.json?include=users`
//!
//! Pages are followed through `next_page` until it is `null`. Only public
//! comments are kept, which is what the customer actually saw.

use super::{CommentSource, SourceError};
use crate::libs::comment::CommentRecord;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;

/// Connection settings for a Zendesk account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZendeskConfig {
    /// Email of the user the API token belongs to.
    pub email: String,
    /// API token from Admin Center → Apps and integrations → Zendesk API.
    pub token: String,
    /// Account subdomain, `acme` for `acme.zendesk.com`.
    pub subdomain: String,
}

impl ZendeskConfig {
    pub fn base_url(&self) -> String {
        format!("https://{}.zendesk.com", self.subdomain)
    }

    /// Username for token authentication, `{email}/token`.
    fn username(&self) -> String {
        format!("{}/token", self.email)
    }
}

/// One page of `tickets/{id}/comments.json`.
#[derive(Debug, Deserialize)]
pub struct CommentsPage {
    pub comments: Vec<ZendeskComment>,
    #[serde(default)]
    pub users: Vec<ZendeskUser>,
    pub next_page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ZendeskComment {
    pub id: u64,
    pub author_id: u64,
    #[serde(default = "default_public")]
    pub public: bool,
    pub created_at: String,
}

fn default_public() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ZendeskUser {
    pub id: u64,
    pub email: Option<String>,
    pub role: String,
}

impl CommentsPage {
    /// Maps public comments to records using the sideloaded users.
    ///
    /// An author missing from the sideload gets an empty email and role; the
    /// empty role is rejected later during validation.
    pub fn into_records(self) -> Vec<CommentRecord> {
        let users: HashMap<u64, &ZendeskUser> = self.users.iter().map(|user| (user.id, user)).collect();

        self.comments
            .iter()
            .filter(|comment| comment.public)
            .map(|comment| match users.get(&comment.author_id) {
                Some(user) => CommentRecord {
                    author_email: user.email.clone().unwrap_or_default(),
                    author_type: user.role.clone(),
                    commented_at: comment.created_at.clone(),
                },
                None => {
                    msg_warning!(Message::UnknownCommentAuthor {
                        comment: comment.id,
                        author: comment.author_id,
                    });
                    CommentRecord {
                        author_email: String::new(),
                        author_type: String::new(),
                        commented_at: comment.created_at.clone(),
                    }
                }
            })
            .collect()
    }
}

/// Zendesk API client.
#[derive(Debug)]
pub struct Zendesk {
    client: Client,
    config: ZendeskConfig,
}

impl Zendesk {
    pub fn new(config: &ZendeskConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// First page URL of a ticket's comments, with authors sideloaded.
    pub fn comments_url(&self, ticket_id: u64) -> String {
        format!("{}/api/v2/tickets/{}/comments.json?include=users", self.config.base_url(), ticket_id)
    }

    async fn get_page(&self, url: String) -> Result<CommentsPage, SourceError> {
        let res = self
            .client
            .get(&url)
            .basic_auth(self.config.username(), Some(&self.config.token))
            .send()
            .await?;

        check_status(res.status(), &url)?;
        Ok(res.json::<CommentsPage>().await?)
    }
}

/// Maps a response status to the matching [`SourceError`].
pub fn check_status(status: StatusCode, url: &str) -> Result<(), SourceError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SourceError::Unauthorized(url.to_string())),
        StatusCode::NOT_FOUND => Err(SourceError::NotFound(url.to_string())),
        status if !status.is_success() => Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Walks `next_page` links starting at `first_url`, collecting the public
/// comments of every page in order. The first failing page aborts the walk.
pub async fn collect_pages<F, Fut>(first_url: String, mut get_page: F) -> Result<Vec<CommentRecord>, SourceError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<CommentsPage, SourceError>>,
{
    let mut records = Vec::new();
    let mut next = Some(first_url);
    let mut page_no = 0;

    while let Some(url) = next {
        page_no += 1;
        let page = get_page(url).await?;
        next = page.next_page.clone();

        let total = page.comments.len();
        let page_records = page.into_records();
        msg_debug!(Message::FetchedCommentsPage {
            page: page_no,
            comments: total,
            public: page_records.len(),
        });
        records.extend(page_records);
    }

    Ok(records)
}

impl CommentSource for Zendesk {
    async fn fetch_comments(&self, ticket_id: u64) -> Result<Vec<CommentRecord>, SourceError> {
        msg_debug!(Message::FetchingComments(ticket_id));
        collect_pages(self.comments_url(ticket_id), |url| self.get_page(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ZendeskConfig {
        ZendeskConfig {
            email: "ops@acme.com".to_string(),
            token: "secret".to_string(),
            subdomain: "acme".to_string(),
        }
    }

    #[test]
    fn test_comments_url() {
        let zendesk = Zendesk::new(&config());
        assert_eq!(
            zendesk.comments_url(42),
            "https://acme.zendesk.com/api/v2/tickets/42/comments.json?include=users"
        );
    }

    #[test]
    fn test_token_username() {
        assert_eq!(config().username(), "ops@acme.com/token");
    }
}
