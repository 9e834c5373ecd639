use super::service::DocService;
use crate::docs::DocumentModelCache;
use may::coroutine::JoinHandle;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const READY_POLL: Duration = Duration::from_millis(5);
const CHECK_TIMEOUT: Duration = Duration::from_millis(200);

/// The documentation endpoints bound to a listening socket.
#[derive(Debug, Clone)]
pub struct DocServer {
    service: DocService,
}

impl DocServer {
    pub fn new(cache: Arc<DocumentModelCache>) -> Self {
        Self {
            service: DocService::new(cache),
        }
    }

    /// Bind `addr` and serve on the may runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not resolve or cannot be bound.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let handle = may_minihttp::HttpServer(self.service).start(addr)?;
        info!(%addr, "Documentation server listening");
        Ok(ServerHandle { addr, handle })
    }
}

/// A running [`DocServer`].
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Poll `GET /health` until it answers 200 or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns `TimedOut` if the health endpoint never answered.
    pub fn wait_ready(&self, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            match check_health(self.addr) {
                Ok(true) => return Ok(()),
                Ok(false) => debug!(addr = %self.addr, "Health check answered non-200"),
                Err(e) => debug!(addr = %self.addr, error = %e, "Health check failed"),
            }
            if Instant::now() >= deadline {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "documentation server not ready",
                ));
            }
            thread::sleep(READY_POLL);
        }
    }

    /// Cancel the server coroutine and wait for it to unwind.
    pub fn stop(self) {
        info!(addr = %self.addr, "Stopping documentation server");
        // SAFETY: the handle is owned here and cancellation is requested
        // once; may unwinds the accept loop on its next yield.
        unsafe {
            self.handle.coroutine().cancel();
        }
        if self.handle.join().is_err() {
            debug!("Server coroutine unwound on cancel");
        }
    }

    /// Block until the server coroutine completes.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the server coroutine panicked.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn check_health(addr: SocketAddr) -> io::Result<bool> {
    let mut stream = TcpStream::connect_timeout(&addr, CHECK_TIMEOUT)?;
    stream.set_read_timeout(Some(CHECK_TIMEOUT))?;
    write!(
        stream,
        "GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    )?;
    let mut status_line = String::new();
    BufReader::new(stream).read_line(&mut status_line)?;
    Ok(status_line.split_whitespace().nth(1) == Some("200"))
}
