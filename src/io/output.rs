use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::formatting::FormattingConfig;
use crate::output::{generate_csv, generate_json, generate_summary, render_terminal, RoiReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Csv,
    Json,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()>;
}

pub struct SummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for SummaryWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let summary = generate_summary(&report.profile, &report.outcome);
        self.writer.write_all(summary.as_bytes())?;
        Ok(())
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let csv = generate_csv(&report.profile, &report.outcome);
        self.writer.write_all(csv.as_bytes())?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let json = generate_json(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let formatter = self.formatting.formatter();
        let rendered = render_terminal(report, formatter.as_ref());
        self.writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Summary => Box::new(SummaryWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
