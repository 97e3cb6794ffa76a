//! Booking lifecycle against the live REST server.
//!
//! # Design
//! Starts the server on a random port with a store in a temp directory, then
//! drives `BookingApi` and `TransportClient` over real HTTP. Checks that the
//! client's request building and status contract agree with the server's
//! routes and bodies.

use std::io::{BufRead, BufReader, Write};
use std::net::SocketAddr;

use booking_core::{ApiError, Booking, BookingApi, BookingStore, HttpMethod, TransportClient};
use chrono::{Duration, Local};

fn start_server(store: BookingStore) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            booking_server::run(listener, store).await
        })
        .unwrap();
    });

    addr
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/bookings")
}

#[test]
fn booking_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("booking.json");
    let addr = start_server(BookingStore::open(&data_file));
    let api = BookingApi::with_client(TransportClient::with_base_url(&base_url(addr)));

    // Step 1: nothing stored yet.
    assert!(api.list_all().unwrap().is_empty());
    assert!(matches!(api.list_by_last_email(), Err(ApiError::NotFound)));

    // Step 2: create a booking ten days out.
    let date = Local::now().date_naive() + Duration::days(10);
    let kari = Booking::new(1, "Kari Hansen", "kari@hansen.no", "Pedicure", date);
    assert_eq!(api.create(&kari).unwrap(), kari);

    // Step 3: both queries return exactly that booking.
    assert_eq!(api.list_all().unwrap(), vec![kari.clone()]);
    assert_eq!(api.list_by_last_email().unwrap(), vec![kari.clone()]);

    // Step 4: a different customer, then Kari again with different casing.
    let ola = Booking::new(2, "Ola Nordmann", "ola@x.no", "Manicure", date);
    let kari_again = Booking::new(3, "Kari Hansen", "KARI@hansen.no", "Spa Facial", date);
    api.create(&ola).unwrap();
    assert_eq!(api.list_by_last_email().unwrap(), vec![ola.clone()]);
    api.create(&kari_again).unwrap();
    assert_eq!(
        api.list_by_last_email().unwrap(),
        vec![kari.clone(), kari_again.clone()]
    );

    // Step 5: the file mirrors what was added.
    let mut reopened = BookingStore::open(&data_file);
    assert_eq!(reopened.load(), vec![kari, ola, kari_again]);
}

#[test]
fn rejected_create_is_remote_400() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start_server(BookingStore::open(dir.path().join("booking.json")));
    let client = TransportClient::with_base_url(&base_url(addr));

    let err = client.post("/add", r#"{"bookingNumber":"x"}"#).unwrap_err();
    match err {
        ApiError::Remote { status, body } => {
            assert_eq!(status, 400);
            assert!(body.starts_with("Failed to create booking: "), "{body}");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[test]
fn unknown_route_is_remote_404() {
    let dir = tempfile::tempdir().unwrap();
    let addr = start_server(BookingStore::open(dir.path().join("booking.json")));
    let client = TransportClient::with_base_url(&base_url(addr));

    let err = client.request(HttpMethod::Delete, "/1", None).unwrap_err();
    assert!(matches!(err, ApiError::Remote { status: 404, .. }));
}

#[test]
fn refused_connection_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = TransportClient::with_base_url(&format!("http://127.0.0.1:{port}/api/bookings"));

    let err = client.get("").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

/// Answer every connection with a 302 pointing at a route that would
/// answer 200, so following the redirect would hide the 3xx.
fn start_redirecting_server() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }

            let response = if request_line.contains("/api/bookings/other") {
                "HTTP/1.1 200 OK\r\nContent-Length: 8\r\nConnection: close\r\n\r\nfollowed"
            } else {
                "HTTP/1.1 302 Found\r\nLocation: /api/bookings/other\r\nContent-Length: 5\r\nConnection: close\r\n\r\nmoved"
            };
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    addr
}

#[test]
fn redirect_is_remote_error_not_followed() {
    let addr = start_redirecting_server();
    let client = TransportClient::with_base_url(&base_url(addr));

    let err = client.get("/x").unwrap_err();
    match err {
        ApiError::Remote { status, body } => {
            assert_eq!(status, 302);
            assert_eq!(body, "moved");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}
