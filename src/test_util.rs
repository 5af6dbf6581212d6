use std::{net::TcpListener, path::Path, sync::Arc};

use axum::Router;

use crate::{app::env::Envy, config::service::ConfigStore, AppState};

pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(async move {
        let _ = server.await;
    });

    format!("http://{}", addr)
}

pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub fn state(config_dir: &Path, envy: Envy) -> AppState {
    AppState {
        envy: Arc::new(envy),
        config: Arc::new(ConfigStore::new(config_dir)),
        client: reqwest::Client::new(),
    }
}

pub fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    // crc, not checked by header decoding
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}
