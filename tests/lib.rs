// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use usersessions_generator::*;



#[test]
fn test_core_id_types() {
    let user_id = UserId(1_000_123);
    let session_id = SessionId(10_000_456);
    let record_id = RecordId(2);

    assert_eq!(user_id.to_string(), "1000123");
    assert_eq!(session_id.to_string(), "10000456");
    assert_eq!(record_id.value(), 2);

    assert_eq!(serde_json::to_string(&user_id).unwrap(), "1000123");
    assert_eq!(serde_json::to_string(&record_id).unwrap(), "2");
}

#[test]
fn test_category_labels() {
    let pairs: Vec<String> = MajorPair::ALL.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        pairs,
        [
            "EURUSD", "GBPUSD", "USDCAD", "USDCHF", "USDJPY", "EURGBP", "EURCHF", "AUDUSD",
            "EURJPY", "GBPJPY"
        ]
    );

    let indicators: Vec<String> = Indicator::ALL.iter().map(|i| i.to_string()).collect();
    assert_eq!(indicators, ["MACD", "EMA", "MA", "SMA", "Bollinger", "Fibonacci"]);

    let intervals: Vec<String> = Interval::ALL.iter().map(|i| i.to_string()).collect();
    assert_eq!(intervals, ["5s", "1", "30", "1h", "1d", "1m"]);

    assert_eq!(RequestType::Research.to_string(), "research");
    assert_eq!(RequestType::End.to_string(), "END");
}

#[test]
fn test_default_run_shape() {
    let config = GeneratorConfig { seed: Some(2024), ..Default::default() };
    let mut orchestrator = BundleOrchestrator::new(config).unwrap();
    let mut sink = MemorySink::new();

    let stats = orchestrator.run(&mut sink).unwrap();

    assert_eq!(stats.visits_generated, 100);
    assert_eq!(stats.end_events, 100);
    assert_eq!(stats.records_written, sink.len());
    assert_eq!(stats.first_record_id, Some(RecordId(2)));
    assert_eq!(stats.last_record_id, Some(RecordId(101)));
}
