use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::Value;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub token: Option<String>,
}

impl RecordedRequest {
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Serves canned `records` bodies per table id and records every request.
pub struct NocoStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl NocoStub {
    /// `tables` maps a table id to the status code and JSON body to answer with.
    pub fn spawn(tables: Vec<(&str, u16, Value)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start noco stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let tables: HashMap<String, (u16, Value)> = tables
            .into_iter()
            .map(|(id, status, body)| (id.to_owned(), (status, body)))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let url = reqwest::Url::parse(&format!("http://stub{}", request.url()))
                .expect("parse request url");
            let token = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("xc-token"))
                .map(|h| h.value.as_str().to_owned());
            recorded.lock().unwrap().push(RecordedRequest {
                path: url.path().to_owned(),
                query: url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
                token,
            });

            let table_id = url
                .path()
                .strip_prefix("/api/v2/tables/")
                .and_then(|rest| rest.strip_suffix("/records"));

            let Some((status, body)) = table_id.and_then(|id| tables.get(id)) else {
                let _ = request.respond(
                    tiny_http::Response::from_string(r#"{"msg":"Table not found"}"#)
                        .with_status_code(404),
                );
                continue;
            };

            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("build header");
            let response = tiny_http::Response::from_string(body.to_string())
                .with_status_code(*status)
                .with_header(header);
            let _ = request.respond(response);
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for NocoStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
