//! Well-known instance group, job and alias names.

/// Primary broker role. Its group hosts the `kafka_server` job.
pub const KAFKA_SERVER: &str = "kafka_server";

/// Coordination role.
pub const ZOOKEEPER_SERVER: &str = "zookeeper_server";

/// Errand role running the smoke tests.
pub const SMOKE_TESTS: &str = "smoke_tests";

/// Telemetry forwarder job added to every group when logging is configured.
pub const METRON_AGENT: &str = "metron_agent";

/// Groups every plan must declare, in reporting order.
pub const REQUIRED_GROUPS: [&str; 2] = [KAFKA_SERVER, ZOOKEEPER_SERVER];

/// Alias of the single stemcell every generated instance group refers to.
pub const ONLY_STEMCELL_ALIAS: &str = "only-stemcell";

/// Port Kafka brokers listen on for client traffic.
pub const KAFKA_PORT: u16 = 9092;
