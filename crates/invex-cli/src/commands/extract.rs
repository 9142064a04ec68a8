//! Extract command - pull fields from a single invoice PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use invex_core::{InvoiceExtractor, InvoiceRecord};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report fields that came back empty
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    pb.set_message("Loading PDF...");
    let data = fs::read(&args.input)?;

    pb.set_message("Extracting fields...");
    let extractor = InvoiceExtractor::new(config);
    let record = extractor.extract(&data)?;

    pb.finish_and_clear();

    if args.validate {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            eprintln!("{}", style("Empty fields:").yellow());
            for field in &missing {
                eprintln!("  - {}", field);
            }
        }
    }

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let fields = record.fields();
    wtr.write_record(fields.iter().map(|(name, _)| *name))?;
    wtr.write_record(fields.iter().map(|(_, value)| *value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.invoice_number));
    output.push_str(&format!("Date:    {}\n", record.invoice_date));
    output.push_str(&format!("Order:   {} ({})\n", record.order_number, record.order_date));
    output.push('\n');

    output.push_str("Billing:\n");
    output.push_str(&format!("  {}\n", record.billing_name));
    output.push_str(&format!("  {}\n", record.billing_address));
    if !record.client_tax_id.is_empty() {
        output.push_str(&format!("  GSTIN: {}\n", record.client_tax_id));
    }
    output.push('\n');

    if !record.shipping_address.is_empty() {
        output.push_str(&format!("Shipping: {}\n", record.shipping_address));
    }
    if !record.sold_by.is_empty() {
        output.push_str(&format!("Sold by:  {}\n", record.sold_by));
    }
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!("  State code: {}\n", record.state_code));
    output.push_str(&format!("  HSN:        {}\n", record.hsn_code));
    output.push_str(&format!("  Item code:  {}\n", record.item_code));
    output.push_str(&format!("  Tax:        {}\n", record.tax_amount));
    output.push_str(&format!("  Total:      {}\n", record.total_amount));

    output
}
