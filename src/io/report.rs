use anyhow::*;
use serde::Serialize;
use std::io::Write;

use crate::search::orchestrator::SearchReport;

/// Writes the report the way analysts are used to read it: one block per lipid
/// saturation, with `mass,sequence` lines and a result count.
pub fn write_text_report<W: Write>(out: &mut W, report: &SearchReport, label: Option<&str>) -> Result<()> {
    let query = &report.query;

    if let Some(label) = label {
        writeln!(out, "# {}", label)?;
    }
    writeln!(
        out,
        "Peak mass: {:.5} ({}, {} residues, C{} lipid, tolerance {} Da)",
        query.target_mass(),
        query.topology(),
        query.chain_length(),
        query.lipid_carbon_count(),
        query.tolerance()
    )?;

    for variant in &report.variants {
        writeln!(out, "Saturation: {}", variant.lipid.saturation)?;
        for m in &variant.matches {
            writeln!(out, "{:.5},{}", m.mono_mass, m.sequence)?;
        }
        writeln!(out, "Total of {} result(s)", variant.matches.len())?;
    }

    Ok(())
}

#[derive(Serialize)]
struct MatchRow<'a> {
    label: &'a str,
    peak_mass: f64,
    saturation: String,
    lipid_mass: f64,
    residual_mass: f64,
    sequence: &'a str,
    mass: f64,
}

/// CSV report with one row per match, shared by every searched peak.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(out: W) -> Self {
        CsvReportWriter { writer: csv::Writer::from_writer(out) }
    }

    pub fn write_report(&mut self, report: &SearchReport, label: Option<&str>) -> Result<()> {
        for variant in &report.variants {
            for m in &variant.matches {
                self.writer.serialize(MatchRow {
                    label: label.unwrap_or(""),
                    peak_mass: report.query.target_mass(),
                    saturation: variant.lipid.saturation.to_string(),
                    lipid_mass: variant.lipid.mono_mass,
                    residual_mass: variant.residual_mass,
                    sequence: &m.sequence,
                    mass: m.mono_mass,
                })?;
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| anyhow!("can't flush the CSV report: {}", err.error()))
    }
}
