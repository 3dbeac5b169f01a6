use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::error::AppResult;

/// Behaviour for one accepted connection.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Respond {
        delay: Duration,
        status: u16,
        body: &'static str,
    },
    Hangup,
}

impl Reply {
    pub(crate) const fn ok_after(delay: Duration) -> Self {
        Reply::Respond {
            delay,
            status: 200,
            body: "OK",
        }
    }
}

pub(crate) struct TestServer {
    pub(crate) url: String,
    accepted: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub(crate) fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns a local HTTP/1.1 server. Connection `n` gets `replies[n]`; once
/// the list runs out every further connection gets the last reply. Every
/// response closes its connection.
pub(crate) async fn spawn_server(replies: Vec<Reply>) -> AppResult<TestServer> {
    spawn_with(replies, false).await
}

/// Spawns a server that keeps connections open and answers every request
/// sent on one with `reply`. `accepted()` counts connections, not requests.
pub(crate) async fn spawn_keep_alive_server(reply: Reply) -> AppResult<TestServer> {
    spawn_with(vec![reply], true).await
}

async fn spawn_with(replies: Vec<Reply>, keep_alive: bool) -> AppResult<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepted);

    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let index = counter.fetch_add(1, Ordering::SeqCst);
            let reply = replies
                .get(index)
                .or_else(|| replies.last())
                .copied()
                .unwrap_or(Reply::Hangup);
            tokio::spawn(handle_client(stream, reply, keep_alive));
        }
    });

    Ok(TestServer {
        url: format!("http://{}/", addr),
        accepted,
        handle,
    })
}

/// Returns a URL on a port nothing listens on.
pub(crate) async fn closed_port_url() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

async fn handle_client(mut stream: TcpStream, reply: Reply, keep_alive: bool) {
    let mut pending = Vec::new();
    let mut buffer = [0u8; 4096];
    loop {
        let read = match stream.read(&mut buffer).await {
            Ok(0) | Err(_) => return,
            Ok(read) => read,
        };
        pending.extend_from_slice(buffer.get(..read).unwrap_or_default());

        // Requests carry no body, so the header terminator ends each one.
        while let Some(end) = header_end(&pending) {
            pending.drain(..end);
            if !respond(&mut stream, reply, keep_alive).await || !keep_alive {
                drop(stream.shutdown().await);
                return;
            }
        }
    }
}

async fn respond(stream: &mut TcpStream, reply: Reply, keep_alive: bool) -> bool {
    let Reply::Respond {
        delay,
        status,
        body,
    } = reply
    else {
        return false;
    };
    tokio::time::sleep(delay).await;
    let connection = if keep_alive { "keep-alive" } else { "close" };
    let response = format!(
        "HTTP/1.1 {} TEST\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n{}",
        status,
        body.len(),
        connection,
        body
    );
    stream.write_all(response.as_bytes()).await.is_ok()
}

fn header_end(pending: &[u8]) -> Option<usize> {
    pending
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|start| start.saturating_add(4))
}
