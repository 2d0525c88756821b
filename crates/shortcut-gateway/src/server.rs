use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use shortcut_store::persistence::{self, DEFAULT_BACKUP_PATH};
use shortcut_store::UrlStore;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use typed_builder::TypedBuilder;

use crate::app::App;
use crate::error::ServerError;
use crate::lifecycle::{Lifecycle, Phase};
use crate::state::AppState;

/// Configures a [`Server`] instance.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to, e.g. `127.0.0.1:8080`.
    #[builder(setter(into))]
    pub listen_addr: String,
    /// Mapping to load before serving. A load failure is fatal when set.
    #[builder(default)]
    pub load_path: Option<PathBuf>,
    /// Where the mapping is written at shutdown.
    #[builder(default = PathBuf::from(DEFAULT_BACKUP_PATH), setter(into))]
    pub backup_path: PathBuf,
}

/// Owns the store and drives it through the process [`Phase`]s.
pub struct Server {
    settings: ServerSettings,
    store: Arc<UrlStore>,
    lifecycle: Lifecycle,
}

impl Server {
    pub fn new(settings: ServerSettings) -> Self {
        Self {
            settings,
            store: Arc::new(UrlStore::default()),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn store(&self) -> Arc<UrlStore> {
        Arc::clone(&self.store)
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Runs the whole lifecycle: load, bind, serve until `shutdown`
    /// resolves, then save.
    ///
    /// The mapping is saved even when serving ended with an error; that
    /// error is returned afterwards.
    pub async fn run<F>(mut self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.load()?;
        let listener = self.bind().await?;
        let served = self.serve(listener, shutdown).await;
        self.save()?;
        served
    }

    /// Enters [`Phase::LoadingMapping`] and loads the configured mapping.
    ///
    /// Returns the number of loaded pairs, `0` when no load was requested.
    /// On failure the lifecycle ends in [`Phase::Exited`].
    pub fn load(&mut self) -> Result<usize, ServerError> {
        self.lifecycle.advance(Phase::LoadingMapping)?;

        let Some(path) = self.settings.load_path.as_ref() else {
            info!("no mapping to load, starting empty");
            return Ok(0);
        };

        match persistence::load(&*self.store, path) {
            Ok(loaded) => Ok(loaded),
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load url mapping");
                self.lifecycle.advance(Phase::Exited)?;
                Err(ServerError::Load(err))
            }
        }
    }

    /// Binds the configured listen address. On failure the lifecycle ends in
    /// [`Phase::Exited`].
    pub async fn bind(&mut self) -> Result<TcpListener, ServerError> {
        match TcpListener::bind(&self.settings.listen_addr).await {
            Ok(listener) => Ok(listener),
            Err(source) => {
                self.lifecycle.advance(Phase::Exited)?;
                Err(ServerError::Bind {
                    addr: self.settings.listen_addr.clone(),
                    source,
                })
            }
        }
    }

    /// Serves requests on `listener` until `shutdown` resolves.
    ///
    /// Returns once new connections are refused and in-flight requests have
    /// completed, leaving the lifecycle in [`Phase::ShuttingDown`].
    pub async fn serve<F>(&mut self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.lifecycle.advance(Phase::Serving)?;

        match listener.local_addr() {
            Ok(addr) => info!(listen_addr = %addr, "serving requests"),
            Err(err) => warn!(error = %err, "serving requests on unknown address"),
        }

        let app = App::router(AppState::new(self.store()));
        let signal = async move {
            shutdown.await;
            info!("stop signal received, draining in-flight requests");
        };
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await;

        self.lifecycle.advance(Phase::ShuttingDown)?;
        served.map_err(ServerError::Serve)
    }

    /// Saves the mapping and ends the lifecycle in [`Phase::Exited`].
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn save(&mut self) -> Result<(), ServerError> {
        self.lifecycle.advance(Phase::SavingMapping)?;

        let path = &self.settings.backup_path;
        if let Err(err) = persistence::save(&*self.store, path) {
            error!(path = %path.display(), error = %err, "failed to save url mapping");
        }

        self.lifecycle.advance(Phase::Exited)
    }
}
