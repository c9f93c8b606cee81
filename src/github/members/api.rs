//! Organization membership API operations

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use log::debug;

use crate::config::api;
use crate::error::{GhError, Result};
use crate::github::executor::{ApiResponse, Lookup, RequestExecutor};
use crate::github::GhClient;

use super::models::{Member, MemberOptions};

/// Membership operations for one organization API
///
/// Holds nothing but a borrowed executor, so it is cheap to create per call
/// and safe to share across tasks.
///
/// Organization and member names are trimmed of surrounding whitespace before
/// use: `" alice "` addresses `alice`, and a blank name is rejected with
/// [`GhError::Validation`] before any request is made.
pub struct OrgMembers<'a, E: RequestExecutor + ?Sized> {
    executor: &'a E,
}

impl<'a, E: RequestExecutor + ?Sized> OrgMembers<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// List members of an organization (single request)
    ///
    /// `options.public_only` switches to the public members listing; the
    /// remaining options are sent as query parameters.
    pub async fn list(&self, org: &str, options: &MemberOptions) -> Result<Vec<Member>> {
        let org = require("organization", org)?;
        let path = collection_path(org, options.public_only);

        debug!("Listing members of {} (public only: {})", org, options.public_only);

        let response = self.executor.get(&path, &options.query()).await?;
        response.parse()
    }

    /// Lazily stream members of an organization, following pagination
    ///
    /// Nothing is requested until the stream is polled; the next page is
    /// fetched only once the current one has been consumed. A validation
    /// failure is yielded as the only item.
    pub fn list_stream(&self, org: &str, options: &MemberOptions) -> BoxStream<'a, Result<Member>> {
        let org = match require("organization", org) {
            Ok(org) => org,
            Err(e) => return stream::once(async move { Err::<Member, GhError>(e) }).boxed(),
        };

        let executor = self.executor;
        let cursor = PageCursor {
            path: collection_path(org, options.public_only),
            query: options.query(),
            page: None,
        };

        stream::try_unfold(Some(cursor), move |cursor| fetch_page(executor, cursor))
            .map_ok(|members| stream::iter(members.into_iter().map(Ok::<Member, GhError>)))
            .try_flatten()
            .boxed()
    }

    /// Check whether `member` belongs to `org`
    ///
    /// True only for `204 No Content`. A not-found answer means "not a
    /// member" and yields false; every other error is returned unchanged.
    pub async fn check_membership(
        &self,
        org: &str,
        member: &str,
        options: &MemberOptions,
    ) -> Result<bool> {
        let (org, member) = require_pair(org, member)?;
        let path = member_path(org, member, options.public_only);

        match self.executor.probe(&path, &options.query()).await? {
            Lookup::Found(response) => {
                debug!("{} in {}: status {}", member, org, response.status);
                Ok(response.is_no_content())
            }
            Lookup::NotFound => {
                debug!("{} is not a member of {}", member, org);
                Ok(false)
            }
        }
    }

    /// Remove a user from the organization
    pub async fn remove_member(
        &self,
        org: &str,
        member: &str,
        options: &MemberOptions,
    ) -> Result<ApiResponse> {
        let (org, member) = require_pair(org, member)?;
        debug!("Removing {} from {}", member, org);
        self.executor
            .delete(&member_path(org, member, false), &options.query())
            .await
    }

    /// Make a user's membership publicly visible
    pub async fn publicize_membership(
        &self,
        org: &str,
        member: &str,
        options: &MemberOptions,
    ) -> Result<ApiResponse> {
        let (org, member) = require_pair(org, member)?;
        debug!("Publicizing membership of {} in {}", member, org);
        self.executor
            .put(&member_path(org, member, true), options.body().as_ref())
            .await
    }

    /// Conceal a user's membership again
    pub async fn conceal_membership(
        &self,
        org: &str,
        member: &str,
        options: &MemberOptions,
    ) -> Result<ApiResponse> {
        let (org, member) = require_pair(org, member)?;
        debug!("Concealing membership of {} in {}", member, org);
        self.executor
            .delete(&member_path(org, member, true), &options.query())
            .await
    }
}

impl GhClient {
    /// Organization membership operations over this client
    pub fn members(&self) -> OrgMembers<'_, GhClient> {
        OrgMembers::new(self)
    }
}

/// Where the next page of a listing lives
struct PageCursor {
    path: String,
    query: Vec<(String, String)>,
    page: Option<u32>,
}

impl PageCursor {
    fn query(&self) -> Vec<(String, String)> {
        match self.page {
            None => self.query.clone(),
            Some(page) => self
                .query
                .iter()
                .filter(|(k, _)| k != "page")
                .cloned()
                .chain(std::iter::once(("page".to_string(), page.to_string())))
                .collect(),
        }
    }
}

async fn fetch_page<E: RequestExecutor + ?Sized>(
    executor: &E,
    cursor: Option<PageCursor>,
) -> Result<Option<(Vec<Member>, Option<PageCursor>)>> {
    let Some(cursor) = cursor else {
        return Ok(None);
    };

    let response = executor.get(&cursor.path, &cursor.query()).await?;
    let members: Vec<Member> = response.parse()?;

    debug!(
        "Page {} of {} returned {} members",
        cursor.page.unwrap_or(1),
        cursor.path,
        members.len()
    );

    let current = cursor.page.unwrap_or(1);
    let next = match response.next_page {
        Some(page) if page > current => Some(PageCursor {
            page: Some(page),
            ..cursor
        }),
        Some(page) => {
            debug!(
                "Ignoring next page {} of {}: not after page {}",
                page, cursor.path, current
            );
            None
        }
        None => None,
    };
    Ok(Some((members, next)))
}

/// Reject missing identifiers before any request is made
fn require<'s>(what: &str, value: &'s str) -> Result<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GhError::Validation(format!("{} name is required", what)));
    }
    Ok(trimmed)
}

fn require_pair<'s>(org: &'s str, member: &'s str) -> Result<(&'s str, &'s str)> {
    Ok((require("organization", org)?, require("member", member)?))
}

fn collection_path(org: &str, public_only: bool) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGS,
        urlencoding::encode(org),
        collection(public_only)
    )
}

fn member_path(org: &str, member: &str, public_only: bool) -> String {
    format!(
        "{}/{}",
        collection_path(org, public_only),
        urlencoding::encode(member)
    )
}

fn collection(public_only: bool) -> &'static str {
    if public_only {
        api::PUBLIC_MEMBERS
    } else {
        api::MEMBERS
    }
}
