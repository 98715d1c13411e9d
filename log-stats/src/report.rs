use std::io::Write;

use mongodb::{Collection, bson::Document, bson::doc};
use tracing::info;

use crate::error::Result;
use crate::models::Method;

const STATUS_PATH: &str = "/status";

/// Aggregate counts over the nginx log collection. Exists only long enough
/// to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NginxStats {
    pub total: u64,
    pub by_method: [(Method, u64); 5],
    pub status_checks: u64,
}

impl NginxStats {
    /// Runs the seven count queries, sequentially and exactly once each.
    pub async fn gather(logs: &Collection<Document>) -> Result<Self> {
        info!("starting nginx log analysis");

        let total = logs.count_documents(doc! {}).await?;

        let mut by_method = [(Method::Get, 0); 5];
        for (slot, method) in by_method.iter_mut().zip(Method::ALL) {
            let count = logs
                .count_documents(doc! { "method": method.as_str() })
                .await?;
            *slot = (method, count);
        }

        let status_checks = logs
            .count_documents(doc! { "method": Method::Get.as_str(), "path": STATUS_PATH })
            .await?;

        Ok(Self {
            total,
            by_method,
            status_checks,
        })
    }

    /// Writes the report in its stable format. Stdout in production; tests
    /// pass a buffer.
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{} logs", self.total)?;
        writeln!(out, "Methods:")?;
        for (method, count) in &self.by_method {
            writeln!(out, "\tmethod {method}: {count}")?;
        }
        writeln!(out, "{} status check", self.status_checks)
    }
}
