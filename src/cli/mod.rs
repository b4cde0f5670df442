use std::io::Read;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, Command};
use tracing::info;

use crate::decode::decode_report;
use crate::surface::speakable_text;
use crate::types::{ContentBlock, DecodedSection, SectionKind};

/// CLI entry point for the travel-report tool
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = Command::new("travel-report")
        .version("0.1.0")
        .about("Decode an AI travel report into sections, payloads, and content blocks")
        .arg(
            Arg::new("input")
                .help("Path to the raw report text, or `-` for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("section")
                .short('s')
                .long("section")
                .value_name("SECTION")
                .help("Limit output to one section: visa, safety, culture, or itinerary"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("speech")
                .long("speech")
                .help("Print the read-aloud sanitized text instead of blocks")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read report from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read report from `{}`", input))?
    };

    let section = matches
        .get_one::<String>("section")
        .map(|s| SectionKind::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?;

    info!(bytes = raw.len(), "decoding report");
    let report = decode_report(&raw);

    let kinds: Vec<SectionKind> = match section {
        Some(kind) => vec![kind],
        None => SectionKind::ALL.to_vec(),
    };

    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    if matches.get_flag("speech") {
        for kind in &kinds {
            println!("{}", speakable_text(report.get(*kind).clean_text.as_str()));
        }
        return Ok(());
    }

    match format.as_str() {
        "json" => match section {
            Some(kind) => println!("{}", serde_json::to_string_pretty(report.get(kind))?),
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "text" => {
            for kind in &kinds {
                print_section(*kind, report.get(*kind));
            }
        }
        other => anyhow::bail!("unknown format `{}` (expected text or json)", other),
    }

    Ok(())
}

fn print_section(kind: SectionKind, section: &DecodedSection) {
    println!("=== {} ===", kind);
    for block in &section.blocks {
        match block {
            ContentBlock::Spacer => println!(),
            ContentBlock::Table { header, rows } => {
                println!("  {}", header.join(" | "));
                for row in rows {
                    println!("  {}", row.join(" | "));
                }
            }
            other => println!("{}", other.describe()),
        }
    }
    if !section.payloads.is_empty() {
        println!("[{} structured payload(s) attached]", section.payloads.len());
    }
    println!();
}
