#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary YAML file with a unique name
    pub fn create_temp_yaml(content: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "brrtdoc_test_{}_{}_{}.yaml",
            std::process::id(),
            counter,
            nanos
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod test_server {
    use std::sync::Once;

    /// Ensures May coroutines are configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }
}

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    pub fn send_request(addr: &SocketAddr, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(200)))
            .unwrap();
        let mut buf = Vec::new();
        loop {
            let mut tmp = [0u8; 1024];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {:?}", e),
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// (status, content type, body)
    pub fn parse_response_parts(resp: &str) -> (u16, String, String) {
        let mut parts = resp.splitn(2, "\r\n\r\n");
        let headers = parts.next().unwrap_or("");
        let body = parts.next().unwrap_or("").to_string();
        let mut status = 0;
        let mut content_type = String::new();
        for line in headers.lines() {
            if line.starts_with("HTTP/1.1") {
                status = line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("0")
                    .parse()
                    .unwrap();
            } else if let Some((name, val)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-type") {
                    content_type = val.trim().to_string();
                }
            }
        }
        (status, content_type, body)
    }

    pub fn get(addr: &SocketAddr, path: &str) -> (u16, String, String) {
        let resp = send_request(
            addr,
            &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"),
        );
        parse_response_parts(&resp)
    }
}

pub mod fixtures {
    /// Pet store routes: two default-grouped controllers, one explicit
    /// multi-module group, a view controller and an ignorable admin route.
    pub const PET_STORE_MANIFEST: &str = r#"
controllers:
  - name: PetController
    handlers:
      - name: list_pets
        urls: ["/pets"]
        methods: [GET]
        meta: { title: List pets, index: 2 }
        returns:
          - { name: total, type: int }
          - name: items
            type: array
            children:
              - { name: id, type: long }
              - { name: name, type: string, example: Rex }
      - name: get_pet
        urls: ["/pets/{id}"]
        methods: [GET]
        meta: { title: Get pet, index: 1 }
        params:
          - { name: id, type: long, location: path, required: true }
      - name: delete_pet
        urls: ["/pets/{id}"]
        methods: [DELETE]
        hidden: true
  - name: StoreController
    group: { names: [store, inventory], index: 3 }
    handlers:
      - name: inventory
        urls: ["/store/inventory"]
        methods: [GET]
  - name: AdminController
    handlers:
      - name: settings
        urls: ["/admin/settings"]
        methods: [GET, POST]
  - name: PageController
    response: view
    handlers:
      - { name: home, urls: ["/"], methods: [GET] }
"#;

    pub const PET_STORE_CONFIG: &str = r#"
title: Pet Store
team: platform
version: "1.0.0"
copyright: "(c) Pet Store"
contact: pets@example.com
ignore_url_set:
  - /admin/*
global_responses:
  - { code: 200, msg: success }
"#;
}
