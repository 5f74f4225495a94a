//! Defines the names of the spans, events and fields that the chase reports to `tracing`.
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const ROUND_FIELD: &str = "round";
pub const ROUNDS_FIELD: &str = "rounds";
pub const ROWS_FIELD: &str = "rows";
pub const TABLE_FIELD: &str = "table";
pub const ANSWER_FIELD: &str = "answer";
pub const DEPENDENCY_FIELD: &str = "dependency";

// log span types:
/// Inside a run of the chase
pub const CHASE: &str = "@chase";

// log event types:
/// A round is about to start.
pub const ROUND: &str = "@round";

/// An FD changed the table.
pub const FD: &str = "@fd";

/// MVDs appended rows to the table.
pub const MVD: &str = "@mvd";

/// The bound of the run is reached. The run fails.
pub const BOUND: &str = "@bound";

/// The run is complete.
pub const ANSWER: &str = "@answer";

/// An FD is entailed by the rest and is removed from the cover.
pub const REDUNDANT: &str = "@redundant";

/// An FD is not entailed by the rest and stays in the cover.
pub const KEPT: &str = "@kept";
