// Performance benchmarks for the tracker and the bencode codec
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use simple_tracker::bencode::bencode::{decode, encode};
use simple_tracker::bencode::enums::bencode_value::BencodeValue;
use simple_tracker::config::structs::configuration::Configuration;
use simple_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use simple_tracker::tracker::types::announce_query::AnnounceQuery;

fn random_bytes() -> Vec<u8> {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    bytes.to_vec()
}

fn announce_query(info_hash: &[u8], peer_id: &[u8], compact: bool) -> AnnounceQuery {
    let mut query = AnnounceQuery::new();
    query.insert("info_hash".to_string(), vec![info_hash.to_vec()]);
    query.insert("peer_id".to_string(), vec![peer_id.to_vec()]);
    query.insert("port".to_string(), vec![b"6881".to_vec()]);
    if !compact {
        query.insert("compact".to_string(), vec![b"0".to_vec()]);
    }
    query
}

fn create_tracker() -> Arc<TorrentTracker> {
    Arc::new(TorrentTracker::new(Arc::new(Configuration::init())))
}

const LOCALHOST: Option<IpAddr> = Some(IpAddr::V4(Ipv4Addr::LOCALHOST));

fn bench_announce_new_torrent(c: &mut Criterion) {
    let tracker = create_tracker();

    c.bench_function("announce_new_torrent", |b| {
        b.iter(|| {
            let query = announce_query(&random_bytes(), &random_bytes(), true);
            black_box(tracker.announce_response(LOCALHOST, &query));
        });
    });
}

fn bench_announce_swarm(c: &mut Criterion) {
    let mut group = c.benchmark_group("announce_swarm");

    for size in [10, 100, 1000].iter() {
        let tracker = create_tracker();
        let info_hash = random_bytes();
        for _ in 0..*size {
            tracker.announce_response(LOCALHOST, &announce_query(&info_hash, &random_bytes(), true));
        }
        let peer_id = random_bytes();

        group.bench_with_input(BenchmarkId::new("compact", size), size, |b, _| {
            let query = announce_query(&info_hash, &peer_id, true);
            b.iter(|| black_box(tracker.announce_response(LOCALHOST, &query)));
        });
        group.bench_with_input(BenchmarkId::new("dictionary", size), size, |b, _| {
            let query = announce_query(&info_hash, &peer_id, false);
            b.iter(|| black_box(tracker.announce_response(LOCALHOST, &query)));
        });
    }

    group.finish();
}

fn bench_remove_stale_peers(c: &mut Criterion) {
    let tracker = create_tracker();
    for _ in 0..10_000 {
        tracker.announce_response(LOCALHOST, &announce_query(&random_bytes(), &random_bytes(), true));
    }

    c.bench_function("remove_stale_peers_none_stale", |b| {
        b.iter(|| black_box(tracker.remove_stale_peers(Instant::now())));
    });

    c.bench_function("remove_stale_peers_all_stale", |b| {
        b.iter_batched(
            || {
                let tracker = create_tracker();
                for _ in 0..1000 {
                    tracker.announce_response(LOCALHOST, &announce_query(&random_bytes(), &random_bytes(), true));
                }
                tracker
            },
            |tracker| black_box(tracker.remove_stale_peers(Instant::now() + Duration::from_secs(3600))),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_concurrent_announces(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let tracker = create_tracker();

    c.bench_function("concurrent_announces_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut handles = Vec::with_capacity(100);
            for _ in 0..100 {
                let tracker = tracker.clone();
                handles.push(tokio::spawn(async move {
                    let query = announce_query(&random_bytes(), &random_bytes(), true);
                    tracker.announce_response(LOCALHOST, &query)
                }));
            }
            for handle in handles {
                black_box(handle.await.unwrap());
            }
        });
    });
}

fn bench_bencode(c: &mut Criterion) {
    let peers = BencodeValue::list((0..200u16).map(|index| {
        BencodeValue::dictionary([
            ("ip", BencodeValue::string("192.168.100.200")),
            ("peer id", BencodeValue::bytes(random_bytes())),
            ("port", BencodeValue::from(index)),
        ])
    }));
    let response = BencodeValue::dictionary([("interval", BencodeValue::from(120i64)), ("peers", peers)]);
    let encoded = encode(&response);

    c.bench_function("bencode_encode_response", |b| {
        b.iter(|| black_box(encode(&response)));
    });
    c.bench_function("bencode_decode_response", |b| {
        b.iter(|| black_box(decode(&encoded)));
    });
}

criterion_group!(
    benches,
    bench_announce_new_torrent,
    bench_announce_swarm,
    bench_remove_stale_peers,
    bench_concurrent_announces,
    bench_bencode
);

criterion_main!(benches);
