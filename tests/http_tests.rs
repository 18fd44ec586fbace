mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use simple_tracker::bencode::bencode::decode;
use simple_tracker::http::http::http_service_routes;
use simple_tracker::http::structs::http_service_data::HttpServiceData;

fn create_service_data(tracker: common::TestTracker) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: common::create_test_http_config(),
    })
}

fn peer_addr() -> SocketAddr {
    "127.0.0.1:50000".parse().unwrap()
}

#[actix_web::test]
async fn test_http_announce_compact() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&info_hash, &peer_id, 6881, ""))
        .peer_addr(peer_addr())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response = decode(&body).unwrap();
    assert_eq!(response.get("interval").and_then(|interval| interval.as_i64()), Some(120));
    assert_eq!(response.get("peers").and_then(|peers| peers.as_bytes()), Some([127, 0, 0, 1, 0x1A, 0xE1].as_slice()));
    assert!(tracker.get_torrent(&info_hash).unwrap().peers.contains_key(&peer_id));
}

#[actix_web::test]
async fn test_http_announce_non_compact() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&info_hash, &peer_id, 6881, "&compact=0"))
        .peer_addr(peer_addr())
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let response = decode(&body).unwrap();

    let peers = response.get("peers").and_then(|peers| peers.as_list()).unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].get("ip").and_then(|ip| ip.as_str()), Some("127.0.0.1"));
    assert_eq!(peers[0].get("port").and_then(|port| port.as_i64()), Some(6881));
    assert_eq!(peers[0].get("peer id").and_then(|id| id.as_bytes()), Some(peer_id.0.as_slice()));
}

#[actix_web::test]
async fn test_http_announce_uses_real_ip_header() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&info_hash, &peer_id, 6881, ""))
        .insert_header(("X-Real-IP", "203.0.113.7"))
        .peer_addr(peer_addr())
        .to_request();
    test::call_service(&app, req).await;

    let torrent = tracker.get_torrent(&info_hash).unwrap();
    assert_eq!(torrent.peers[&peer_id].ip, common::ip("203.0.113.7"));
}

#[actix_web::test]
async fn test_http_announce_bad_real_ip_header_fails() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let info_hash = common::random_info_hash();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&info_hash, &common::random_peer_id(), 6881, ""))
        .insert_header(("X-Real-IP", "not-an-ip"))
        .peer_addr(peer_addr())
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body.as_ref(), b"d14:failure reason38:Unwanted internal error or bad requeste");
    assert!(tracker.get_torrent(&info_hash).is_none());
}

#[actix_web::test]
async fn test_http_announce_missing_fields() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let req = test::TestRequest::get().uri("/announce?port=6881").peer_addr(peer_addr()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Failures are reported in the body");

    let body = test::read_body(resp).await;
    let response = decode(&body).unwrap();
    assert!(response.get("failure reason").is_some());
    assert_eq!(tracker.get_stats().announces_failed, 1);
}

#[actix_web::test]
async fn test_http_status() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.handle_announce(Some(common::ip("10.0.0.1")), &common::announce_query(&info_hash, &peer_id, 6881)).unwrap();

    let req = test::TestRequest::get().uri("/status").peer_addr(peer_addr()).to_request();
    let status: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(status["stats"]["torrents"], 1);
    assert_eq!(status["stats"]["peers"], 1);
    let peer = &status["torrents"][info_hash.to_string()]["peers"][peer_id.to_string()];
    assert_eq!(peer["ip"], "10.0.0.1");
    assert_eq!(peer["port"], 6881);
    assert_eq!(peer["event"], "none");
    assert_eq!(peer["interval"], 120);
    assert!(peer["seconds_since_update"].is_u64());
    assert_eq!(tracker.get_stats().status_handled, 1);
}

#[actix_web::test]
async fn test_http_not_found() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(create_service_data(tracker.clone())))
    )
        .await;

    let req = test::TestRequest::get().uri("/scrape").peer_addr(peer_addr()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"d14:failure reason15:unknown requeste");
    assert_eq!(tracker.get_stats().not_found, 1);
}
