use crate::domain::report::Report;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_report_json(report: &Report, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("report serialize failed")?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    tracing::info!(path = %path.display(), symbol = %report.symbol, "report json exported");
    Ok(())
}
