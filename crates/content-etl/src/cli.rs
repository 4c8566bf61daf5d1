//! Command-line surface of the `content-etl` binary.
//!
//! Parsing and the conversion run live here so the binary stays a thin
//! wrapper and the whole pipeline can be exercised without spawning a
//! process.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::atomic_io::{read_to_string, write_atomic};
use crate::error::EtlError;
use crate::format::{Formatted, SkippedRecord, format_hotels, format_restaurants};
use crate::raw::{RawHotel, RawRestaurant};
use crate::vocabulary::VocabularySet;

/// Kind of listing being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Hotels, guest houses and holiday flats.
    Hotels,
    /// Restaurants, cafés and snack bars.
    Restaurants,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hotels => "hotels",
            Self::Restaurants => "restaurants",
        })
    }
}

/// Arguments accepted by `content-etl`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "content-etl",
    about = "Format scraped hotel or restaurant listings into guide fixtures",
    version
)]
pub struct CliArgs {
    /// Which listing format the input holds.
    #[arg(value_enum)]
    pub kind: RecordKind,
    /// Scraped JSON array to read.
    #[arg(long, value_name = "path")]
    pub input: Utf8PathBuf,
    /// Fixture file to replace.
    #[arg(long, value_name = "path")]
    pub output: Utf8PathBuf,
    /// Keyword tables to use instead of the built-in ones.
    #[arg(long, value_name = "path")]
    pub vocabulary: Option<Utf8PathBuf>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlReport {
    /// Kind of listing converted.
    pub kind: RecordKind,
    /// Number of records written.
    pub written: usize,
    /// Inputs that produced no record.
    pub skipped: Vec<SkippedRecord>,
    /// Fixture path written.
    pub output: Utf8PathBuf,
}

/// Convert the input named by `args` and replace the output fixture.
///
/// # Errors
///
/// Fails when the vocabulary or input cannot be loaded, when no record
/// survives formatting, or when the fixture cannot be written. The output
/// file is left untouched in every failure case.
pub fn run(args: &CliArgs) -> Result<EtlReport, EtlError> {
    let vocabulary = match &args.vocabulary {
        Some(path) => VocabularySet::from_json(&read_to_string(path)?)?,
        None => VocabularySet::builtin(args.kind)?,
    };
    let input = read_to_string(&args.input)?;

    let (json, written, skipped) = match args.kind {
        RecordKind::Hotels => {
            let raw: Vec<RawHotel> = parse(&args.input, &input)?;
            render(&args.input, format_hotels(&raw, &vocabulary))?
        }
        RecordKind::Restaurants => {
            let raw: Vec<RawRestaurant> = parse(&args.input, &input)?;
            render(&args.input, format_restaurants(&raw, &vocabulary))?
        }
    };

    write_atomic(&args.output, &json)?;
    info!(
        kind = %args.kind,
        written,
        skipped = skipped.len(),
        output = %args.output,
        "fixture written"
    );
    Ok(EtlReport {
        kind: args.kind,
        written,
        skipped,
        output: args.output.clone(),
    })
}

fn parse<T: DeserializeOwned>(path: &Utf8Path, json: &str) -> Result<Vec<T>, EtlError> {
    serde_json::from_str(json).map_err(|err| EtlError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn render<T: Serialize>(
    input: &Utf8Path,
    formatted: Formatted<T>,
) -> Result<(String, usize, Vec<SkippedRecord>), EtlError> {
    if formatted.records.is_empty() {
        return Err(EtlError::NoRecords {
            path: input.to_path_buf(),
        });
    }
    let mut json = serde_json::to_string_pretty(&formatted.records).map_err(|err| {
        EtlError::Serialize {
            message: err.to_string(),
        }
    })?;
    json.push('\n');
    Ok((json, formatted.records.len(), formatted.skipped))
}

/// One-line summary printed after a successful run.
#[must_use]
pub fn success_message(report: &EtlReport) -> String {
    let mut message = format!(
        "Wrote {} {} to {}",
        report.written, report.kind, report.output
    );
    if !report.skipped.is_empty() {
        let indices: Vec<String> = report
            .skipped
            .iter()
            .map(|skipped| skipped.index.to_string())
            .collect();
        message.push_str(&format!(
            " (skipped {}: input {})",
            report.skipped.len(),
            indices.join(", ")
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::AccommodationRecord;
    use rstest::rstest;

    #[rstest]
    #[case(&["content-etl", "hotels", "--input", "raw.json", "--output", "out.json"], RecordKind::Hotels, None)]
    #[case(
        &["content-etl", "restaurants", "--input", "raw.json", "--output", "out.json", "--vocabulary", "v.json"],
        RecordKind::Restaurants,
        Some("v.json")
    )]
    fn parses_arguments(
        #[case] argv: &[&str],
        #[case] kind: RecordKind,
        #[case] vocabulary: Option<&str>,
    ) {
        let args = CliArgs::try_parse_from(argv).expect("arguments parse");
        assert_eq!(args.kind, kind);
        assert_eq!(args.input, "raw.json");
        assert_eq!(args.output, "out.json");
        assert_eq!(args.vocabulary.as_deref().map(Utf8Path::as_str), vocabulary);
    }

    #[rstest]
    #[case(&["content-etl", "beaches", "--input", "a", "--output", "b"])]
    #[case(&["content-etl", "hotels", "--input", "a"])]
    fn rejects_bad_arguments(#[case] argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[rstest]
    fn success_message_lists_skipped_inputs() {
        let report = EtlReport {
            kind: RecordKind::Restaurants,
            written: 4,
            skipped: vec![
                SkippedRecord {
                    index: 1,
                    reason: "missing name".to_owned(),
                },
                SkippedRecord {
                    index: 6,
                    reason: "missing name".to_owned(),
                },
            ],
            output: Utf8PathBuf::from("backend/fixtures/restaurants.json"),
        };

        assert_eq!(
            success_message(&report),
            "Wrote 4 restaurants to backend/fixtures/restaurants.json (skipped 2: input 1, 6)"
        );
    }

    #[rstest]
    fn malformed_input_is_a_parse_error() {
        let err = parse::<RawHotel>(Utf8Path::new("raw.json"), "{\"name\": 1")
            .expect_err("truncated json");
        assert!(matches!(err, EtlError::Parse { path, .. } if path == "raw.json"));
    }

    #[rstest]
    fn empty_output_is_refused() {
        let empty: Formatted<AccommodationRecord> = Formatted::default();
        let err = render(Utf8Path::new("raw.json"), empty).expect_err("nothing to write");
        assert_eq!(
            err,
            EtlError::NoRecords {
                path: Utf8PathBuf::from("raw.json")
            }
        );
    }
}
