mod helpers;

use helpers::{frame, PbMessageBuilder};
use rpz_exporter_application::ports::{PolicyCounter, PolicyHitReporter};
use rpz_exporter_application::use_cases::RecordAppliedPolicyUseCase;
use rpz_exporter_domain::config::MetricsConfig;
use rpz_exporter_domain::PolicyHit;
use rpz_exporter_infrastructure::ingest::{
    AggregationSink, ConnectionAcceptor, ConnectionHandler, MessageEmitter,
};
use rpz_exporter_infrastructure::metrics::MetricsRegistry;
use rpz_exporter_infrastructure::protobuf::ProtobufMessageParser;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

#[derive(Clone, Default)]
struct RecordingReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl PolicyHitReporter for RecordingReporter {
    fn report(&self, hit: &PolicyHit) {
        self.lines.lock().unwrap().push(hit.to_string());
    }
}

fn peer() -> SocketAddr {
    "127.0.0.1:50000".parse().unwrap()
}

fn handler(registry: &MetricsRegistry, emitter: MessageEmitter) -> ConnectionHandler {
    ConnectionHandler::new(
        Arc::new(ProtobufMessageParser::new()),
        emitter,
        registry.ingest_metrics(),
    )
}

async fn wait_for_total(counter: &dyn PolicyCounter, expected: u64) -> u64 {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let total: u64 = counter.snapshot().iter().map(|c| c.count).sum();
        if total >= expected || tokio::time::Instant::now() >= deadline {
            return total;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

// ── connection handler ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_handler_recovers_from_bad_payload() {
    let registry = MetricsRegistry::new(&MetricsConfig::default()).unwrap();
    let (emitter, mut rx) = MessageEmitter::new(16);

    let mut stream = Vec::new();
    stream.extend(PbMessageBuilder::response().from("192.0.2.1").frame());
    stream.extend(frame(&[0xFF, 0xFF, 0xFF]));
    stream.extend(PbMessageBuilder::response().from("192.0.2.2").frame());

    let summary = handler(&registry, emitter).handle(&stream[..], peer()).await;

    assert_eq!(summary.delivered, 2);
    assert_eq!(summary.parse_errors, 1);
    assert_eq!(summary.frame_errors, 0);
    assert_eq!(registry.ingest_metrics().parse_errors(), 1);

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.resolver_identity().as_deref(), Some("192.0.2.1"));
    assert_eq!(second.resolver_identity().as_deref(), Some("192.0.2.2"));
}

#[tokio::test]
async fn test_handler_stops_on_truncated_frame() {
    let registry = MetricsRegistry::new(&MetricsConfig::default()).unwrap();
    let (emitter, mut rx) = MessageEmitter::new(16);

    let mut stream = PbMessageBuilder::response().from("192.0.2.1").frame();
    stream.extend_from_slice(&40u16.to_be_bytes());
    stream.extend_from_slice(b"short");

    let summary = handler(&registry, emitter).handle(&stream[..], peer()).await;

    assert_eq!(summary.delivered, 1);
    assert_eq!(summary.frame_errors, 1);
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_handler_stops_when_sink_closed() {
    let registry = MetricsRegistry::new(&MetricsConfig::default()).unwrap();
    let (emitter, rx) = MessageEmitter::new(1);
    drop(rx);

    let mut stream = Vec::new();
    for _ in 0..3 {
        stream.extend(PbMessageBuilder::response().from("192.0.2.1").frame());
    }

    let summary = handler(&registry, emitter).handle(&stream[..], peer()).await;
    assert_eq!(summary.delivered, 0);
}

// ── aggregation sink ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_sink_counts_and_reports() {
    let registry = MetricsRegistry::new(&MetricsConfig::default()).unwrap();
    let counter = registry.policy_counter();
    let reporter = RecordingReporter::default();
    let use_case = RecordAppliedPolicyUseCase::new(counter.clone())
        .with_hit_reporter(Arc::new(reporter.clone()));

    let (emitter, rx) = MessageEmitter::new(16);
    let sink = AggregationSink::new(use_case).start(rx);

    let mut stream = Vec::new();
    stream.extend(
        PbMessageBuilder::response()
            .from("192.0.2.1")
            .question("example.com.", 1)
            .policy("")
            .frame(),
    );
    stream.extend(
        PbMessageBuilder::response()
            .from("192.0.2.1")
            .question("example.com.", 1)
            .policy("nxdomain")
            .frame(),
    );
    stream.extend(
        PbMessageBuilder::query()
            .from("192.0.2.1")
            .question("example.com.", 1)
            .frame(),
    );
    stream.extend(PbMessageBuilder::response().policy("nxdomain").frame());

    handler(&registry, emitter).handle(&stream[..], peer()).await;

    let stats = sink.await.unwrap();
    assert_eq!(stats.counted, 2);
    assert_eq!(stats.not_response, 1);
    assert_eq!(stats.no_resolver, 1);

    assert_eq!(counter.count("clean", "192.0.2.1"), 1);
    assert_eq!(counter.count("nxdomain", "192.0.2.1"), 1);

    let lines = reporter.lines.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec!["client 192.0.2.1: query: example.com. A [p=nxdomain]".to_string()]
    );
}

// ── full TCP pipeline ──────────────────────────────────────────────────────

struct Pipeline {
    addr: SocketAddr,
    registry: Arc<MetricsRegistry>,
}

async fn start_pipeline(max_connections: Option<usize>) -> Pipeline {
    let registry = Arc::new(MetricsRegistry::new(&MetricsConfig::default()).unwrap());
    let (emitter, rx) = MessageEmitter::new(8);

    AggregationSink::new(RecordAppliedPolicyUseCase::new(registry.policy_counter())).start(rx);

    let mut acceptor = ConnectionAcceptor::bind(
        "127.0.0.1:0".parse().unwrap(),
        handler(&registry, emitter),
        registry.ingest_metrics(),
    )
    .await
    .unwrap();
    if let Some(max) = max_connections {
        acceptor = acceptor.with_max_connections(max);
    }
    let addr = acceptor.local_addr().unwrap();
    tokio::spawn(acceptor.run());

    Pipeline { addr, registry }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_connections_lose_no_increments() {
    let pipeline = start_pipeline(None).await;
    const PER_CONNECTION: usize = 500;

    let mut producers = Vec::new();
    for (resolver, policy) in [("192.0.2.1", "nxdomain"), ("192.0.2.2", "")] {
        let addr = pipeline.addr;
        producers.push(tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            for i in 0..PER_CONNECTION {
                let mut bytes = PbMessageBuilder::response()
                    .from(resolver)
                    .question("example.com.", 1)
                    .policy(policy)
                    .frame();
                // Skipped records interleaved with counted ones.
                if i % 10 == 0 {
                    bytes.extend(PbMessageBuilder::query().from(resolver).frame());
                    bytes.extend(PbMessageBuilder::response().frame());
                }
                stream.write_all(&bytes).await.unwrap();
            }
            stream.shutdown().await.unwrap();
        }));
    }
    for producer in producers {
        producer.await.unwrap();
    }

    let counter = pipeline.registry.policy_counter();
    let total = wait_for_total(counter.as_ref(), 2 * PER_CONNECTION as u64).await;

    assert_eq!(total, 2 * PER_CONNECTION as u64);
    assert_eq!(counter.count("nxdomain", "192.0.2.1"), PER_CONNECTION as u64);
    assert_eq!(counter.count("clean", "192.0.2.2"), PER_CONNECTION as u64);
    assert_eq!(pipeline.registry.ingest_metrics().connections(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_broken_peer_does_not_affect_others() {
    let pipeline = start_pipeline(None).await;

    let mut broken = TcpStream::connect(pipeline.addr).await.unwrap();
    broken.write_all(&[0x00, 0x10, 0xDE, 0xAD]).await.unwrap();
    drop(broken);

    let mut healthy = TcpStream::connect(pipeline.addr).await.unwrap();
    for _ in 0..5 {
        healthy
            .write_all(&PbMessageBuilder::response().from("192.0.2.7").frame())
            .await
            .unwrap();
    }

    let counter = pipeline.registry.policy_counter();
    assert_eq!(wait_for_total(counter.as_ref(), 5).await, 5);
    assert_eq!(counter.count("clean", "192.0.2.7"), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_admission_limit_rejects_extra_connections() {
    let pipeline = start_pipeline(Some(1)).await;

    let mut first = TcpStream::connect(pipeline.addr).await.unwrap();
    first
        .write_all(&PbMessageBuilder::response().from("192.0.2.1").frame())
        .await
        .unwrap();
    let counter = pipeline.registry.policy_counter();
    assert_eq!(wait_for_total(counter.as_ref(), 1).await, 1);

    let _second = TcpStream::connect(pipeline.addr).await.unwrap();

    let ingest = pipeline.registry.ingest_metrics();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while ingest.rejected_connections() == 0 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(ingest.rejected_connections(), 1);
    assert_eq!(ingest.connections(), 1);
}
