use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio::sync::watch;
use simple_tracker::common::common::setup_logging;
use simple_tracker::config::structs::configuration::Configuration;
use simple_tracker::http::http::http_service;
use simple_tracker::structs::Cli;
use simple_tracker::tracker::structs::torrent_tracker::TorrentTracker;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let cleanup_interval = config.tracker_config.peers_cleanup_interval;
            info!("[BOOT] Starting thread for peers cleanup with {cleanup_interval} seconds delay...");
            let cleanup_task = tokio::spawn(tracker.clone().cleanup_task(shutdown_rx.clone()));

            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            let console_task = tokio::spawn({
                let tracker_spawn_stats = tracker.clone();
                let mut stats_shutdown = shutdown_rx.clone();
                async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval.max(1)));
                    interval.tick().await;
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let stats = tracker_spawn_stats.get_stats();
                                info!(
                                    "[STATS] Torrents: {} - Peers: {} - Announces: {} - Failed: {} - Status: {} - 404: {}",
                                    stats.torrents, stats.peers, stats.announces_handled, stats.announces_failed, stats.status_handled, stats.not_found
                                );
                                info!("[STATS] Evicted torrents: {} - Evicted peers: {}", stats.torrents_evicted, stats.peers_evicted);
                            }
                            _ = stats_shutdown.changed() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in config.http_server.iter().filter(|http_server| http_server.enabled) {
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                let (handle, server) = match http_service(address, tracker.clone(), Arc::new(http_server_object.clone())) {
                    Ok(result) => result,
                    Err(error) => {
                        error!("[HTTP] Unable to bind {address}: {error}");
                        exit(1);
                    }
                };
                http_handles.push(handle);
                http_futures.push(server);
            }

            let http_task = tokio::spawn(async move {
                if let Err(error) = try_join_all(http_futures).await {
                    error!("[HTTP] Server stopped with an error: {error}");
                }
            });

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            let _ = shutdown_tx.send(true);
            for handle in http_handles {
                handle.stop(true).await;
            }
            let _ = http_task.await;
            let _ = cleanup_task.await;
            let _ = console_task.await;

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
