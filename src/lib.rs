//! Connectors and team matching for scheduling referees and table officials
//! at a basketball club's home matches.
//!
//! Two hosted PostgREST backends are read: the member directory
//! ([`directory`]) for under-16 players who staff the scorer's table, and the
//! competition planner ([`planner`]) for home matches. [`matcher`] joins the
//! two by team code.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> club_rota::Result<()> {
//! use club_rota::{group_by_team, Config, DirectoryAdapter, CURRENT_SEASON};
//!
//! let directory = DirectoryAdapter::connect(Config::global())?;
//! let players = directory.list_u16_players(CURRENT_SEASON).await?;
//! for (team, players) in group_by_team(players) {
//!     println!("{team}: {} players", players.len());
//! }
//! # Ok(())
//! # }
//! ```

pub use config::{Backend, Config, Credentials};
pub use directory::DirectoryAdapter;
pub use error::{Degrade, ErrorKind, Result, RotaError};
pub use matcher::{canonicalize, filter_for_team, group_by_team, recognize_code, team_matches};
pub use model::*;
pub use planner::MatchSourceAdapter;

pub mod config;
pub mod directory;
pub mod error;
pub mod matcher;
pub mod model;
pub mod planner;
pub(crate) mod postgrest;
