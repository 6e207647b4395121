//! 記録の create / list / search / read / delete をログに記録する PinoStore のラッパ

use crate::domain::Pino;
use crate::ports::outbound::PinoStore;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct LoggingPinoStore {
    inner: Arc<dyn PinoStore>,
    log: Arc<dyn Log>,
}

impl LoggingPinoStore {
    pub fn new(inner: Arc<dyn PinoStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn record(&self, message: &str, operation: &str) -> LogRecord {
        LogRecord::now(LogLevel::Info, message)
            .layer("adapter")
            .kind("store")
            .field("operation", serde_json::json!(operation))
    }
}

impl PinoStore for LoggingPinoStore {
    fn create(&self, summary: &str, prompt: &str, plan: &str) -> Result<String, Error> {
        let filename = self.inner.create(summary, prompt, plan)?;
        let _ = self.log.log(
            &self
                .record("pino write", "create")
                .field("filename", serde_json::json!(filename))
                .field("has_plan", serde_json::json!(!plan.is_empty())),
        );
        Ok(filename)
    }

    fn list_all(&self) -> Result<Vec<Pino>, Error> {
        let out = self.inner.list_all()?;
        let _ = self.log.log(
            &self
                .record("pino read", "list")
                .field("count", serde_json::json!(out.len())),
        );
        Ok(out)
    }

    fn search(&self, keyword: &str) -> Result<Vec<Pino>, Error> {
        let out = self.inner.search(keyword)?;
        let _ = self.log.log(
            &self
                .record("pino read", "search")
                .field("keyword", serde_json::json!(keyword))
                .field("result_count", serde_json::json!(out.len())),
        );
        Ok(out)
    }

    fn read(&self, filename: &str) -> Result<String, Error> {
        let out = self.inner.read(filename)?;
        let _ = self.log.log(
            &self
                .record("pino read", "show")
                .field("filename", serde_json::json!(filename)),
        );
        Ok(out)
    }

    fn delete(&self, filename: &str) -> Result<(), Error> {
        self.inner.delete(filename)?;
        let _ = self.log.log(
            &self
                .record("pino write", "delete")
                .field("filename", serde_json::json!(filename)),
        );
        Ok(())
    }
}
