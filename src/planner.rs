//! Read-only access to the competition planner.

use std::sync::OnceLock;

use chrono::NaiveDate;
use tracing::{instrument, warn};

use crate::config::{Backend, Config};
use crate::error::{Result, RotaError};
use crate::matcher;
use crate::model::MatchList;
use crate::postgrest::matches::{self, MATCHES_TABLE};
use crate::postgrest::RestClient;

/// Handle to the competition planner backend.
#[derive(Debug, Clone)]
pub struct MatchSourceAdapter {
    rest: RestClient,
    club: String,
}

impl MatchSourceAdapter {
    /// Build a handle from `CP_SUPABASE_URL` and `CP_SUPABASE_KEY`.
    ///
    /// Fails with [`RotaError::Unavailable`] when either is missing. Home
    /// matches are recognized by the configured club name.
    pub fn connect(config: &Config) -> Result<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Like [`MatchSourceAdapter::connect`], using the provided [`reqwest::Client`].
    pub fn with_client(config: &Config, client: reqwest::Client) -> Result<Self> {
        let credentials = config.require_credentials(Backend::Planner)?;
        Ok(Self {
            rest: RestClient::new(client, &credentials),
            club: config.club_name(),
        })
    }

    pub fn club(&self) -> &str {
        &self.club
    }

    /// Whether a minimal count query against the match table succeeds.
    #[instrument(skip(self))]
    pub async fn is_connected(&self) -> bool {
        match self.rest.count(MATCHES_TABLE).await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "planner connection check failed");
                false
            }
        }
    }

    /// The club's home matches from `from` to `to` inclusive, by date and start time.
    #[instrument(skip(self))]
    pub async fn list_home_matches(&self, from: NaiveDate, to: NaiveDate) -> Result<MatchList> {
        matches::get_home_matches(&self.rest, &self.club, from, to).await
    }

    /// Home matches of the team `own_code` only.
    #[instrument(skip(self))]
    pub async fn list_home_matches_for_team(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        own_code: &str,
    ) -> Result<MatchList> {
        let matches = self.list_home_matches(from, to).await?;
        Ok(matcher::filter_for_team(&matches, own_code))
    }
}

type SharedSlot = std::result::Result<MatchSourceAdapter, &'static str>;

fn shared_slot() -> &'static SharedSlot {
    static SHARED: OnceLock<SharedSlot> = OnceLock::new();
    SHARED.get_or_init(|| match MatchSourceAdapter::connect(Config::global()) {
        Ok(adapter) => Ok(adapter),
        Err(err) => {
            warn!(error = %err, "competition planner disabled");
            Err(match err {
                RotaError::Unavailable { missing, .. } => missing,
                _ => Backend::Planner.url_key(),
            })
        }
    })
}

/// The process-wide adapter, or `None` when the planner is not configured.
pub fn shared() -> Option<&'static MatchSourceAdapter> {
    shared_slot().as_ref().ok()
}

fn require_shared() -> Result<&'static MatchSourceAdapter> {
    shared_slot()
        .as_ref()
        .map_err(|missing| RotaError::Unavailable {
            backend: Backend::Planner,
            missing: *missing,
        })
}

/// [`MatchSourceAdapter::is_connected`] on the shared adapter; `false` when unconfigured.
pub async fn is_connected() -> bool {
    match shared() {
        Some(adapter) => adapter.is_connected().await,
        None => false,
    }
}

/// [`MatchSourceAdapter::list_home_matches`] on the shared adapter.
pub async fn list_home_matches(from: NaiveDate, to: NaiveDate) -> Result<MatchList> {
    require_shared()?.list_home_matches(from, to).await
}

/// [`MatchSourceAdapter::list_home_matches_for_team`] on the shared adapter.
pub async fn list_home_matches_for_team(
    from: NaiveDate,
    to: NaiveDate,
    own_code: &str,
) -> Result<MatchList> {
    require_shared()?
        .list_home_matches_for_team(from, to, own_code)
        .await
}
