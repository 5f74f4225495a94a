use serde_derive::Serialize;
use std::{
    fmt,
    fs::File,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes one `EventRecord` per line into a given log file.
pub struct JsonLogger {
    log_file: Mutex<File>,
    next_span: AtomicU64,
    current_span: Mutex<Option<u64>>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            next_span: AtomicU64::new(1),
            current_span: Mutex::new(None),
        }
    }

    fn write(&self, record: &EventRecord) {
        if let (Ok(mut file), Ok(json)) = (self.log_file.lock(), serde_json::to_string(record)) {
            let _ = writeln!(file, "{}", json);
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(self.next_span.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        if let Some(event_type) = &recorder.event {
            match event_type.as_ref() {
                super::ROUND
                | super::FD
                | super::MVD
                | super::BOUND
                | super::ANSWER
                | super::REDUNDANT
                | super::KEPT => {
                    let run = self.current_span.lock().ok().and_then(|s| *s);
                    self.write(&EventRecord::new(recorder, run));
                }
                _ => (),
            }
        }
    }

    fn enter(&self, span: &Id) {
        if let Ok(mut current) = self.current_span.lock() {
            *current = Some(span.into_u64());
        }
    }

    fn exit(&self, _span: &Id) {
        if let Ok(mut current) = self.current_span.lock() {
            *current = None;
        }
    }
}

/// A record, containing the information of an event that the chase reports, tagged with the
/// run of the chase in which it happened.
#[derive(Serialize, PartialEq, Debug)]
struct EventRecord {
    event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    round: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rounds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
}

impl EventRecord {
    fn new(value: Recorder, run: Option<u64>) -> Self {
        Self {
            event: value.event.unwrap_or_default(),
            run,
            round: value.round,
            rounds: value.rounds,
            rows: value.rows,
            answer: value.answer,
            dependency: value.dependency,
            table: value.table,
        }
    }
}

/// Generic trace visitor to collect as many fields as it can.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    round: Option<u64>,
    rounds: Option<u64>,
    rows: Option<u64>,
    answer: Option<bool>,
    dependency: Option<String>,
    table: Option<String>,
}

impl Recorder {
    fn new() -> Recorder {
        Default::default()
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::ROUND_FIELD => self.round = Some(value),
            super::ROUNDS_FIELD => self.rounds = Some(value),
            super::ROWS_FIELD => self.rows = Some(value),
            _ => (),
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::ANSWER_FIELD {
            self.answer = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::DEPENDENCY_FIELD => self.dependency = Some(format!("{:?}", value)),
            super::TABLE_FIELD => self.table = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record() {
        let recorder = Recorder {
            event: Some(crate::trace::ANSWER.to_string()),
            rounds: Some(2),
            answer: Some(true),
            ..Default::default()
        };
        let record = EventRecord::new(recorder, Some(1));
        assert_eq!(
            r#"{"event":"@answer","run":1,"rounds":2,"answer":true}"#,
            serde_json::to_string(&record).unwrap()
        );
    }

    #[test]
    fn test_logger() {
        let path = std::env::temp_dir().join(format!("tableau-log-{}.json", std::process::id()));
        let file = File::create(&path).unwrap();
        let logger = JsonLogger::new(file);
        subscriber::with_default(logger, || {
            let span = span!(Level::TRACE, crate::trace::CHASE);
            let _enter = span.enter();
            info!(event = crate::trace::ROUND, round = 0usize);
            info!(event = "@ignored", round = 1usize);
            info!(event = crate::trace::KEPT, dependency = %"A -> B");
        });

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(
            vec![
                r#"{"event":"@round","run":1,"round":0}"#,
                r#"{"event":"@kept","run":1,"dependency":"A -> B"}"#,
            ],
            lines
        );
    }
}
