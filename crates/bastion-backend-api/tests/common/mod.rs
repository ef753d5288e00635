use bastion_backend_api::backend_url::BackendUrl;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves canned HTTP responses, one connection each, in order, and hands
/// back the raw requests.
pub struct FakeBackend {
    pub url: BackendUrl,
    requests: JoinHandle<eyre::Result<Vec<String>>>,
}

impl FakeBackend {
    pub async fn respond(status: &str, body: &str) -> eyre::Result<FakeBackend> {
        Self::respond_in_turn(&[(status, body)]).await
    }

    pub async fn respond_in_turn(responses: &[(&str, &str)]) -> eyre::Result<FakeBackend> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = BackendUrl::parse(&format!("http://{}", listener.local_addr()?))?;
        let responses: Vec<String> = responses
            .iter()
            .map(|(status, body)| {
                format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                )
            })
            .collect();

        let requests = tokio::spawn(async move {
            let mut requests = Vec::with_capacity(responses.len());
            for response in responses {
                let (mut socket, _) = listener.accept().await?;
                let mut request = Vec::new();
                let mut buffer = [0; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buffer).await?;
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buffer[..n]);
                }
                socket.write_all(response.as_bytes()).await?;
                socket.shutdown().await?;
                requests.push(String::from_utf8_lossy(&request).into_owned());
            }
            Ok::<_, eyre::Report>(requests)
        });

        Ok(FakeBackend { url, requests })
    }

    /// The only request, for backends serving a single response.
    pub async fn request(self) -> eyre::Result<String> {
        self.requests()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("No request received"))
    }

    pub async fn requests(self) -> eyre::Result<Vec<String>> {
        self.requests.await?
    }
}

pub fn request_line(request: &str) -> &str {
    request.lines().next().unwrap_or_default()
}

pub fn header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
    request
        .split("\r\n")
        .skip(1)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.strip_prefix(' ').unwrap_or(value))
}

/// An address nothing is listening on.
pub async fn closed_backend() -> eyre::Result<BackendUrl> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    BackendUrl::parse(&format!("http://{}", addr))
}
