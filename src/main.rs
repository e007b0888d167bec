use anyhow::*;
use clap::{Parser, Subcommand, ValueEnum};
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;
use std::{fs::File, io::{BufWriter, Write}, path::PathBuf};

use lipomass::chemistry::constants::SURFACTIN_CHAIN_LENGTH;
use lipomass::io::peaks::{read_peak_list_file, PeakRecord};
use lipomass::io::report::{write_text_report, CsvReportWriter};
use lipomass::ms::utils::{calc_mz_tol_in_daltons, mz_to_mass, MassTolUnit};
use lipomass::search::query::SURFACTIN_DEFAULT_TOLERANCE;
use lipomass::{lipid_masses, run_search, SearchQuery, BIOMOLECULE_ATOM_TABLE, NATURAL_AMINO_ACID_TABLE};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
}

#[derive(Debug, clap::Args)]
struct SearchArgs {
    /// Surfactin defaults: macrocycle, surfactin, 7 residues, 0.5 Da
    #[clap(long, short = 'd', action)]
    surfactin_defaults: bool,
    /// Number of amino acid residues in the peptide moiety
    #[clap(long, short = 'n')]
    residues: Option<usize>,
    /// The peptide is ring-closed
    #[clap(long, action)]
    macrocycle: bool,
    /// The peptide is a surfactin (implies --macrocycle)
    #[clap(long, action)]
    surfactin: bool,
    /// Carbons in the beta-hydroxy fatty acid chain
    #[clap(long, short = 'c')]
    carbons: Option<u32>,
    /// Search tolerance
    #[clap(long, short = 't')]
    tolerance: Option<f64>,
    /// Unit of the search tolerance (Da, mmu or ppm)
    #[clap(long, default_value = "Da")]
    tolerance_unit: MassTolUnit,
    /// Peaks are m/z values of ions with this charge instead of neutral masses
    #[clap(long, short = 'z')]
    charge: Option<i32>,
}

impl SearchArgs {
    fn build_query(&self, peak: &PeakRecord) -> Result<SearchQuery> {
        let peak_mass = match self.charge {
            Some(0) => bail!("the charge state can't be zero"),
            Some(z) => mz_to_mass(peak.peak_mass, z),
            None => peak.peak_mass,
        };

        let preset = self.surfactin_defaults;
        let chain_length = match self.residues {
            Some(n) => n,
            None if preset => SURFACTIN_CHAIN_LENGTH,
            None => bail!("the number of residues is missing, use --residues or --surfactin-defaults"),
        };
        let carbon_count = peak
            .carbon_count
            .or(self.carbons)
            .ok_or_else(|| anyhow!("the lipid carbon count is missing, use --carbons or a carbon_count column"))?;

        let tolerance = match self.tolerance {
            Some(tolerance) => tolerance,
            None if preset => SURFACTIN_DEFAULT_TOLERANCE,
            None => bail!("the search tolerance is missing, use --tolerance or --surfactin-defaults"),
        };
        let tolerance_da = calc_mz_tol_in_daltons(peak_mass, tolerance, self.tolerance_unit);

        SearchQuery::new(
            peak_mass,
            tolerance_da,
            chain_length,
            self.macrocycle || preset,
            self.surfactin || preset,
            carbon_count,
        )
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search lipopeptide compositions matching observed peaks
    #[clap(arg_required_else_help = true)]
    Search {
        /// Observed peak (repeat for several peaks)
        #[clap(long = "peak", short = 'm')]
        peaks: Vec<f64>,
        /// CSV peak list with a `peak_mass` column, and optional `carbon_count` and `label` columns
        #[clap(long, short = 'i')]
        input: Option<PathBuf>,
        #[clap(flatten)]
        params: SearchArgs,
        /// Report format
        #[clap(long, short = 'f', value_enum, default_value = "text")]
        format: OutputFormat,
        /// Write the report to this file instead of the standard output
        #[clap(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Print the fatty acid masses for a carbon count
    #[clap(arg_required_else_help = true)]
    Lipids {
        /// Carbons in the beta-hydroxy fatty acid chain
        #[clap(long, short = 'c')]
        carbons: u32,
    },
}

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    pub command: Commands,

    /// Verbose output. See more with e.g. RUST_LOG=Trace
    #[clap(long, short = 'v', action)]
    pub verbose: bool,
}

fn main() {
    if let Err(err) = do_main() {
        eprintln!("Error: {:#}", &err);
        std::process::exit(1);
    }
}

fn do_main() -> Result<()> {
    let args = Args::parse();
    if std::env::var(DEFAULT_FILTER_ENV).is_err() {
        std::env::set_var(
            DEFAULT_FILTER_ENV,
            if args.verbose { "Debug" } else { "Info" },
        );
    }
    pretty_env_logger::init();

    match args.command {
        Commands::Search { peaks, input, params, format, output } => {
            let mut peak_list: Vec<PeakRecord> = peaks
                .into_iter()
                .map(|peak_mass| PeakRecord { peak_mass, carbon_count: None, label: None })
                .collect();
            if let Some(input) = input {
                peak_list.extend(read_peak_list_file(input)?);
            }
            if peak_list.is_empty() {
                bail!("no peak to search, use --peak or --input");
            }

            let out: Box<dyn Write> = match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("can't create {}", path.display()))?;
                    Box::new(BufWriter::new(file))
                }
                None => Box::new(std::io::stdout().lock()),
            };
            search(&peak_list, &params, format, out)?;
        }
        Commands::Lipids { carbons } => {
            for lipid in lipid_masses(carbons)? {
                println!("{}: {:.5}", lipid.saturation, lipid.mono_mass);
            }
        }
    }
    Ok(())
}

fn search(peak_list: &[PeakRecord], params: &SearchArgs, format: OutputFormat, mut out: Box<dyn Write>) -> Result<()> {
    let mut n_failed = 0;

    // A rejected peak doesn't prevent the others from being searched
    let reports = peak_list.iter().filter_map(|peak| {
        let report = params
            .build_query(peak)
            .and_then(|query| run_search(&query, &BIOMOLECULE_ATOM_TABLE, &NATURAL_AMINO_ACID_TABLE));
        if let Err(err) = &report {
            log::error!("peak {}: {:#}", peak.peak_mass, err);
            n_failed += 1;
        }
        report.ok().map(|report| (peak, report))
    });

    match format {
        OutputFormat::Text => {
            for (peak, report) in reports {
                write_text_report(&mut out, &report, peak.label.as_deref())?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = CsvReportWriter::new(&mut out);
            for (peak, report) in reports {
                writer.write_report(&report, peak.label.as_deref())?;
            }
            writer.into_inner()?;
        }
    }
    out.flush()?;

    if n_failed > 0 {
        bail!("{} of {} peak(s) could not be searched", n_failed, peak_list.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(cli: &[&str]) -> SearchArgs {
        let args = Args::try_parse_from(["lipomass", "search", "--peak", "1036.69"].iter().chain(cli).copied()).unwrap();
        match args.command {
            Commands::Search { params, .. } => params,
            _ => unreachable!(),
        }
    }

    fn peak() -> PeakRecord {
        PeakRecord { peak_mass: 1036.69, carbon_count: None, label: None }
    }

    #[test]
    fn tolerance_is_required_without_the_surfactin_preset() {
        let params = search_args(&["--residues", "7", "--macrocycle", "--carbons", "15"]);
        let err = params.build_query(&peak()).unwrap_err();
        assert!(err.to_string().contains("--tolerance"));

        let params = search_args(&["--residues", "7", "--macrocycle", "--carbons", "15", "--tolerance", "0.1"]);
        assert_eq!(params.build_query(&peak()).unwrap().tolerance(), 0.1);
    }

    #[test]
    fn surfactin_preset_fills_in_the_tolerance() {
        let params = search_args(&["--surfactin-defaults", "--carbons", "15"]);
        let query = params.build_query(&peak()).unwrap();
        assert_eq!(query, SearchQuery::surfactin(1036.69, 15).unwrap());
        assert_eq!(query.tolerance(), SURFACTIN_DEFAULT_TOLERANCE);

        let params = search_args(&["--surfactin-defaults", "--carbons", "15", "--tolerance", "0.2"]);
        assert_eq!(params.build_query(&peak()).unwrap().tolerance(), 0.2);
    }
}
