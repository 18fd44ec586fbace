use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::{json, Map, Value};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/status").route(web::get().to(http_service_status)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds an HTTP listener; the returned server future must be polled to serve.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: Arc<HttpTrackersConfig>
) -> Result<(ServerHandle, Server), std::io::Error>
{
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: http_server_object.clone(),
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(http_server_object.keep_alive))
        .client_request_timeout(Duration::from_secs(http_server_object.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_server_object.disconnect_timeout))
        .workers(http_server_object.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = http_service_retrieve_remote_ip(&request, &data.http_trackers_config);
    let query = parse_query(Some(request.query_string()));
    let body = data.torrent_tracker.announce_response(ip, &query);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn http_service_status(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.torrent_tracker;
    tracker.update_stats(StatsEvent::StatusHandled, 1);
    HttpResponse::Ok().json(http_service_status_body(tracker, Instant::now()))
}

/// Renders counters and the registry snapshot; peer ages are relative to `now`.
pub fn http_service_status_body(tracker: &TorrentTracker, now: Instant) -> Value
{
    let mut torrents = Map::new();
    for (info_hash, peers) in tracker.get_torrents_snapshot() {
        let mut peers_json = Map::new();
        for (peer_id, peer) in peers {
            let mut peer_json = serde_json::to_value(&peer).unwrap_or_default();
            if let Some(object) = peer_json.as_object_mut() {
                object.insert(String::from("seconds_since_update"), json!(now.saturating_duration_since(peer.updated).as_secs()));
            }
            peers_json.insert(peer_id.to_string(), peer_json);
        }
        torrents.insert(info_hash.to_string(), json!({ "peers": peers_json }));
    }

    json!({
        "stats": tracker.get_stats(),
        "torrents": torrents,
    })
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    debug!("[HTTP] Request from {:?}: 404 Not Found {}", request.peer_addr(), request.path());

    let body = BencodeValue::dictionary([("failure reason", BencodeValue::string("unknown request"))]).encode();
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(body)
}

/// Client address for a request.
///
/// `None` when the real IP header is present but unusable, or when the
/// socket address is unknown.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, http_trackers_config: &HttpTrackersConfig) -> Option<IpAddr>
{
    if !http_trackers_config.real_ip.is_empty() {
        if let Some(header) = request.headers().get(http_trackers_config.real_ip.as_str()) {
            return header.to_str()
                .ok()
                .and_then(|value| IpAddr::from_str(value.trim()).ok())
                .map(|ip| ip.to_canonical());
        }
    }
    request.peer_addr().map(|addr| addr.ip().to_canonical())
}
