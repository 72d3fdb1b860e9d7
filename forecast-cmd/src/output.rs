//! Printing chart series as a text table or CSV.

use clap::ValueEnum;
use forecast_api::series::ChartSeries;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for reading in a terminal
    #[default]
    Table,
    /// `date,value` rows with a header
    Csv,
}

/// Write `series` to `out`; `value_header` names the value column.
pub fn write_series<W: Write>(
    out: W,
    series: &ChartSeries,
    value_header: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => write_table(out, series, value_header),
        OutputFormat::Csv => write_csv(out, series, value_header),
    }
}

fn write_table<W: Write>(mut out: W, series: &ChartSeries, value_header: &str) -> anyhow::Result<()> {
    if let Some(label) = &series.y_axis_label {
        writeln!(out, "# y-axis: {}", label)?;
    }
    writeln!(out, "{:<12} {:>12}", "date", value_header)?;
    for (date, value) in series.points() {
        writeln!(out, "{:<12} {:>12}", date, value)?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: W, series: &ChartSeries, value_header: &str) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["date", value_header])?;
    for (date, value) in series.points() {
        writer.write_record([date, value.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
