//! A minimal HTTP listener.
//!
//! Startup binds the socket and spawns the accept loop; the loop runs until
//! the component's stop hook cancels it. The server leans on [`AppState`]
//! for everything request-related, which is also what ties it into the
//! dependency graph: the orchestrator keeps the database, cache, and metrics
//! alive for as long as the listener accepts traffic.

use async_trait::async_trait;
use lifecycle_framework::{BoxError, Startable, Stoppable};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::components::AppState;
use crate::config::ServerSettings;

struct Running {
    addr: SocketAddr,
    accept_loop: JoinHandle<()>,
    cancel: CancellationToken,
}

pub struct HttpServer {
    settings: ServerSettings,
    state: Arc<AppState>,
    running: Mutex<Option<Running>>,
}

impl HttpServer {
    pub fn new(settings: ServerSettings, state: Arc<AppState>) -> Self {
        Self {
            settings,
            state,
            running: Mutex::new(None),
        }
    }

    /// The bound address while the listener is up. With `listen` port 0 this
    /// is where the kernel-assigned port shows up.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running
            .lock()
            .expect("server lock poisoned")
            .as_ref()
            .map(|r| r.addr)
    }

    async fn serve(state: Arc<AppState>, mut socket: TcpStream) {
        state.metrics.record_request();

        // Drain the request before answering; closing with unread bytes in
        // the receive buffer resets the connection.
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;

        let body = if state.database.is_connected() {
            state.cache.get("motd").unwrap_or_else(|| "ok".to_string())
        } else {
            // Not reachable under orchestrated startup; kept for direct use.
            "database offline".to_string()
        };
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        if let Err(error) = socket.write_all(response.as_bytes()).await {
            warn!(%error, "failed to write response");
        }
    }
}

#[async_trait]
impl Startable for HttpServer {
    async fn start(&self, shutdown: CancellationToken) -> Result<(), BoxError> {
        if self.local_addr().is_some() {
            return Err("http server already started".into());
        }

        let listener = TcpListener::bind(self.settings.listen.as_str()).await?;
        let addr = listener.local_addr()?;
        let cancel = shutdown.child_token();

        let state = self.state.clone();
        let loop_cancel = cancel.clone();
        let accept_loop = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = loop_cancel.cancelled() => break,
                    accepted = listener.accept() => match accepted {
                        Ok((socket, _peer)) => Self::serve(state.clone(), socket).await,
                        Err(error) => warn!(%error, "accept failed"),
                    },
                }
            }
        });

        *self.running.lock().expect("server lock poisoned") = Some(Running {
            addr,
            accept_loop,
            cancel,
        });
        info!(%addr, "http server listening");
        Ok(())
    }
}

#[async_trait]
impl Stoppable for HttpServer {
    async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        let running = self.running.lock().expect("server lock poisoned").take();
        let Some(running) = running else {
            return Ok(());
        };

        running.cancel.cancel();
        running.accept_loop.await?;
        info!(addr = %running.addr, "http server closed");
        Ok(())
    }
}
