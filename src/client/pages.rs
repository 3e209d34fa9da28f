//! An iterator over every page of a search.

use std::collections::HashSet;
use std::marker::PhantomData;

use tracing::debug;

use crate::Client;
use crate::client::Error;
use crate::client::Result;
use crate::mapping::Endpoint;
use crate::protocol::search::SearchRequest;
use crate::protocol::search::SearchResponse;

/// An iterator that issues one search request per page, following
/// `nextPageToken` until the server reports the last page.
///
/// A token the server already handed out is reported as
/// [`Error::RepeatedPageToken`] and ends the iteration.
#[derive(Debug)]
pub struct Pages<'a, Q, S>
where
    Q: SearchRequest,
    S: SearchResponse,
{
    /// The client the requests are sent through.
    client: &'a Client,

    /// The search endpoint.
    endpoint: Endpoint,

    /// The request for the next page.
    request: Q,

    /// Every page token seen so far.
    seen: HashSet<String>,

    /// Whether the last page (or an error) has been returned.
    done: bool,

    /// The response type.
    response: PhantomData<S>,
}

impl<'a, Q, S> Pages<'a, Q, S>
where
    Q: SearchRequest,
    S: SearchResponse,
{
    /// Creates a new [`Pages`] starting from `request`.
    pub(crate) fn new(client: &'a Client, endpoint: Endpoint, request: Q) -> Self {
        let mut seen = HashSet::new();
        if let Some(token) = request.page_token() {
            seen.insert(token.to_string());
        }

        Self {
            client,
            endpoint,
            request,
            seen,
            done: false,
            response: PhantomData,
        }
    }

    /// Consumes `self` and collects the records of every page, in order.
    pub fn records(self) -> Result<Vec<S::Item>> {
        let mut records = Vec::new();

        for page in self {
            records.extend(page?);
        }

        Ok(records)
    }
}

impl<Q, S> Iterator for Pages<'_, Q, S>
where
    Q: SearchRequest,
    S: SearchResponse,
{
    type Item = Result<Vec<S::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let response = match self.client.search::<Q, S>(self.endpoint, &self.request) {
            Ok(response) => response,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        let (records, token) = response.into_page();
        debug!(
            "{}: received page of {} record(s)",
            self.endpoint,
            records.len()
        );

        match token {
            None => self.done = true,
            Some(token) => {
                if !self.seen.insert(token.clone()) {
                    self.done = true;
                    return Some(Err(Error::RepeatedPageToken(self.endpoint, token)));
                }

                self.request.set_page_token(Some(token));
            }
        }

        Some(Ok(records))
    }
}
