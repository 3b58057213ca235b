//! Test helpers
//!
//! Provides a fully-wired engine (ledger + ingest + mock collaborators)
//! over a throwaway snapshot path, and an HTTP test server for the API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use podium_api::{create_app, AppState};
use podium_common::{AppConfig, AppSettings, Environment, ScoreboardConfig, ServerConfig};
use podium_core::{RoomId, UserId};
use podium_engine::VoteLedger;
use podium_gateway::{CommandPolicy, EventIngest};
use podium_store::SnapshotStore;

use crate::fixtures::{FakeDirectory, FakeTransport};

/// Moderator used by the default harness
pub const MODERATOR: &str = "@mod:example.org";

/// A fully-wired engine over mock collaborators
pub struct TestEngine {
    pub ledger: Arc<VoteLedger>,
    pub ingest: EventIngest,
    pub transport: Arc<FakeTransport>,
    pub store: Arc<SnapshotStore>,
    pub room: RoomId,
}

impl TestEngine {
    /// Build an engine whose snapshot lives at a unique temp path and
    /// whose directory recognizes exactly one auditorium.
    pub async fn start() -> Result<Self> {
        Self::start_at(unique_snapshot_path()).await
    }

    /// Build an engine over an existing snapshot path (for restart tests)
    pub async fn start_at(snapshot_path: PathBuf) -> Result<Self> {
        let room = RoomId::new("!aud:example.org");
        let store = Arc::new(SnapshotStore::new(snapshot_path));
        let ledger = Arc::new(VoteLedger::new(
            Arc::clone(&store),
            vec!["example.org".to_string()],
        ));
        ledger.load().await?;

        let transport = Arc::new(FakeTransport::new());
        let directory = Arc::new(FakeDirectory::new([room.clone()]));
        let ingest = EventIngest::new(
            Arc::clone(&ledger),
            Arc::clone(&transport) as Arc<dyn podium_core::ChatTransport>,
            directory,
            CommandPolicy::new("!qa", [UserId::new(MODERATOR)]),
        );

        Ok(Self {
            ledger,
            ingest,
            transport,
            store,
            room,
        })
    }
}

/// Get a unique snapshot path under the system temp dir
pub fn unique_snapshot_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("podium-it-{}", Uuid::new_v4()))
        .join("scoreboard.json")
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start an API server over the given ledger on an ephemeral port
    pub async fn start(ledger: Arc<VoteLedger>) -> Result<Self> {
        let config = test_config();
        let state = AppState::new(ledger, config);
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with no body
    pub async fn post(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }
}

/// Create a test configuration over a throwaway snapshot path
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "podium-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        scoreboard: ScoreboardConfig {
            snapshot_path: unique_snapshot_path(),
            homeserver_domains: vec!["example.org".to_string()],
            command_prefix: "!qa".to_string(),
            admin_users: vec![UserId::new(MODERATOR)],
        },
    }
}
