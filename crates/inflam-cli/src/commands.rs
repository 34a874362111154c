use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use inflam_cli::output::{StdDevReport, std_dev_table, summary_table};
use inflam_ingest::{CsvDataSource, JsonDataSource, load_file, write_csv};
use inflam_stats::{DataSource, analyse_data, daily_summary, patient_normalise};

use crate::cli::{AnalyseArgs, NormaliseArgs, OutputArg, SourceArg, SummaryArgs};

pub fn run_analyse(args: &AnalyseArgs) -> Result<()> {
    let span = info_span!("analyse", data_dir = %args.data_dir.display());
    let _guard = span.enter();

    let source: Box<dyn DataSource> = match args.source {
        SourceArg::Csv => Box::new(CsvDataSource::new(&args.data_dir)),
        SourceArg::Json => Box::new(JsonDataSource::new(&args.data_dir)),
    };
    let daily = analyse_data(source.as_ref())
        .with_context(|| format!("analyse {}", args.data_dir.display()))?;

    match args.output {
        OutputArg::Table => println!("{}", std_dev_table(&daily)),
        OutputArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&StdDevReport::new(&daily)).context("serialize report")?
        ),
    }
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let span = info_span!("summary", file = %args.file.display());
    let _guard = span.enter();

    let table = load_file(&args.file).with_context(|| format!("load {}", args.file.display()))?;
    let summary =
        daily_summary(&table).with_context(|| format!("summarise {}", args.file.display()))?;

    match args.output {
        OutputArg::Table => {
            println!("Patients: {}", summary.patients);
            println!("Days: {}", summary.days);
            println!("{}", summary_table(&summary));
        }
        OutputArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize summary")?
        ),
    }
    Ok(())
}

pub fn run_normalise(args: &NormaliseArgs) -> Result<()> {
    let span = info_span!("normalise", file = %args.file.display());
    let _guard = span.enter();

    let table = load_file(&args.file).with_context(|| format!("load {}", args.file.display()))?;
    let normalised =
        patient_normalise(&table).with_context(|| format!("normalise {}", args.file.display()))?;

    match &args.out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_csv(&normalised, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            info!(
                path = %path.display(),
                patients = normalised.row_count(),
                "Wrote normalised table"
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_csv(&normalised, &mut handle).context("write normalised table")?;
            handle.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
