use crate::core::reader::LineSource;
use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::{BufWriter, Write};
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Processes every input line in order, one output line per non-blank input line.
    ///
    /// The input is opened before the output, so a missing input leaves the
    /// output file untouched. Both handles are dropped on every return path.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::new(self.pipeline.input_path(), self.pipeline.output_path());

        tracing::info!(
            "Processing {} -> {}",
            self.pipeline.input_path(),
            self.pipeline.output_path()
        );

        let source = LineSource::new(self.pipeline.extract()?);
        let mut sink = BufWriter::new(self.pipeline.open_sink()?);
        self.monitor.log_stats("Opened");

        for (index, raw_line) in source.enumerate() {
            let raw_line = raw_line?;
            match self.pipeline.transform(index + 1, &raw_line) {
                Some(record) => {
                    writeln!(sink, "{}", record.output())?;
                    summary.record(&record);
                }
                None => summary.record_blank(),
            }
        }
        sink.flush()?;
        drop(sink);
        self.monitor.log_stats("Transformed");

        summary.elapsed_ms = started.elapsed().as_millis();
        tracing::info!(
            "Read {} lines: {} evaluated, {} diagnostics, {} blank",
            summary.lines_read,
            summary.evaluated,
            summary.diagnostic_total(),
            summary.blank_lines
        );

        if let Some(path) = self.pipeline.load_summary(&summary)? {
            tracing::info!("Run summary saved to: {}", path);
        }
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
