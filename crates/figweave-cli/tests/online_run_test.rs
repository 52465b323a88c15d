//! Runs the CLI against a local one-shot HTTP server standing in for the Figma API.

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use tempfile::tempdir;

use figweave_cli::Args;

const BODY: &str = r#"{"name": "Fetched", "document": {"id": "0:0", "type": "DOCUMENT", "children": [
    {"id": "1:1", "type": "TEXT", "characters": "hi",
     "absoluteBoundingBox": {"x": 0, "y": 0, "width": 40, "height": 16}}
]}}"#;

/// Serves a single canned response and sends the raw request head back.
fn serve_once(body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        tx.send(head).unwrap();
    });

    (base_url, rx)
}

#[test]
fn test_fetch_save_and_render() {
    let (base_url, requests) = serve_once(BODY);

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    let env_file = temp_dir.path().join(".env");
    let saved = temp_dir.path().join("saved.json");
    let output_dir = temp_dir.path().join("site");
    fs::write(
        &config,
        format!("[figma]\napi_base_url = \"{base_url}\"\naccess_token = \"token\"\n"),
    )
    .expect("Failed to write config");
    fs::write(&env_file, "").expect("Failed to write .env");

    let args = Args {
        file_key: Some("KEY".to_string()),
        output: Some(output_dir.clone()),
        config: Some(config),
        env_file: Some(env_file),
        save_json: Some(saved.clone()),
        log_level: "off".to_string(),
        ..Default::default()
    };

    figweave_cli::run(&args).expect("online run should succeed");

    let head = requests.recv().unwrap();
    assert!(head.starts_with("GET /v1/files/KEY"), "{head}");

    assert_eq!(fs::read_to_string(&saved).unwrap(), BODY);

    let html = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains("<title>Fetched</title>"));
    assert!(html.contains("<p class=\"figma-text-1-1\">hi</p>"));

    let css = fs::read_to_string(output_dir.join("styles.css")).unwrap();
    assert!(css.contains(".figma-text-1-1 {"));
}
