use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Answers exactly one HTTP request on an ephemeral local port.
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn respond(status: &'static str, body: &'static str) -> Self {
        Self::spawn(move |stream| {
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        })
    }

    /// Accepts the connection but stays silent for `delay`.
    pub fn stall(delay: Duration) -> Self {
        Self::spawn(move |_| thread::sleep(delay))
    }

    fn spawn<F>(reply: F) -> Self
    where
        F: FnOnce(&mut std::net::TcpStream) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            reply(&mut stream);
            request_line.trim_end().to_string()
        });

        Self {
            base_url: format!("http://{addr}/directions/v5/mapbox/driving"),
            handle,
        }
    }

    /// The request line the server received, e.g. `GET /path?query HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

/// A local address nothing is listening on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/directions")
}
