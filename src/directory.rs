//! Read-only access to the member directory ("Team Indeling").

use std::sync::OnceLock;

use tracing::{instrument, warn};

use crate::config::{Backend, Config};
use crate::error::{Result, RotaError};
use crate::model::{Person, CURRENT_SEASON};
use crate::postgrest::members::{self, MEMBERS_TABLE};
use crate::postgrest::RestClient;

/// Team labels of under-16 players contain this marker.
const U16_MARKER: &str = "16";
const U16_CATEGORY: &str = "U16";

/// Handle to the directory backend.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct DirectoryAdapter {
    rest: RestClient,
}

impl DirectoryAdapter {
    /// Build a handle from `TI_SUPABASE_URL` and `TI_SUPABASE_KEY`.
    ///
    /// Fails with [`RotaError::Unavailable`] when either is missing.
    pub fn connect(config: &Config) -> Result<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Like [`DirectoryAdapter::connect`], using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(config: &Config, client: reqwest::Client) -> Result<Self> {
        let credentials = config.require_credentials(Backend::Directory)?;
        Ok(Self {
            rest: RestClient::new(client, &credentials),
        })
    }

    /// Whether a minimal count query against the members table succeeds.
    #[instrument(skip(self))]
    pub async fn is_connected(&self) -> bool {
        match self.rest.count(MEMBERS_TABLE).await {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "directory connection check failed");
                false
            }
        }
    }

    /// Number of rows in the members table, if the backend reports one.
    #[instrument(skip(self))]
    pub async fn member_count(&self) -> Result<Option<u64>> {
        self.rest.count(MEMBERS_TABLE).await
    }

    /// Players of the under-16 teams, sorted by team then last name.
    ///
    /// The season is not applied to the query: the members table only holds
    /// the current team assignment.
    #[instrument(skip(self))]
    pub async fn list_u16_players(&self, season: &str) -> Result<Vec<Person>> {
        members::get_members_in_teams_containing(&self.rest, U16_MARKER).await
    }

    /// Names of the under-16 teams of the current season, sorted.
    #[instrument(skip(self))]
    pub async fn list_u16_team_codes(&self) -> Result<Vec<String>> {
        self.list_team_codes(U16_CATEGORY, CURRENT_SEASON).await
    }

    /// Names of the teams in `category` for `season`, sorted.
    #[instrument(skip(self))]
    pub async fn list_team_codes(&self, category: &str, season: &str) -> Result<Vec<String>> {
        members::get_team_names(&self.rest, category, season).await
    }
}

type SharedSlot = std::result::Result<DirectoryAdapter, &'static str>;

/// Process-wide adapter built from [`Config::global`] on first use.
///
/// An unconfigured directory is logged once and remembered as the missing key.
fn shared_slot() -> &'static SharedSlot {
    static SHARED: OnceLock<SharedSlot> = OnceLock::new();
    SHARED.get_or_init(|| match DirectoryAdapter::connect(Config::global()) {
        Ok(adapter) => Ok(adapter),
        Err(err) => {
            warn!(error = %err, "member directory disabled");
            Err(match err {
                RotaError::Unavailable { missing, .. } => missing,
                _ => Backend::Directory.url_key(),
            })
        }
    })
}

/// The process-wide adapter, or `None` when the directory is not configured.
pub fn shared() -> Option<&'static DirectoryAdapter> {
    shared_slot().as_ref().ok()
}

fn require_shared() -> Result<&'static DirectoryAdapter> {
    shared_slot()
        .as_ref()
        .map_err(|missing| RotaError::Unavailable {
            backend: Backend::Directory,
            missing: *missing,
        })
}

/// [`DirectoryAdapter::is_connected`] on the shared adapter; `false` when unconfigured.
pub async fn is_connected() -> bool {
    match shared() {
        Some(adapter) => adapter.is_connected().await,
        None => false,
    }
}

/// [`DirectoryAdapter::list_u16_players`] on the shared adapter.
pub async fn list_u16_players(season: &str) -> Result<Vec<Person>> {
    require_shared()?.list_u16_players(season).await
}

/// [`DirectoryAdapter::list_u16_team_codes`] on the shared adapter.
pub async fn list_u16_team_codes() -> Result<Vec<String>> {
    require_shared()?.list_u16_team_codes().await
}
