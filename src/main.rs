//! # Vitae CLI
//!
//! Usage:
//!   vitae resumes.json -o out/              export every saved résumé
//!   vitae resumes.json --id 1700000000000   export one
//!   vitae resumes.json --list               list saved résumés
//!   vitae resumes.json --config layout.json -o out/
//!   vitae --example > resumes.json
//!
//! Log verbosity follows `RUST_LOG` (default `vitae=info`).

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitae::layout::SectionOutcome;
use vitae::model::{LayoutConfig, RecordId, ResumeRecord};
use vitae::store::{JsonFileStore, RecordStore};
use vitae::VitaeError;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_store_json());
        return;
    }

    let store_path = match args.get(1).filter(|a| !a.starts_with('-')) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: vitae <resumes.json> [--id <id>] [-o <dir>] [--config <layout.json>] [--list]");
            process::exit(2);
        }
    };

    if let Err(e) = run(&args, JsonFileStore::new(store_path)) {
        eprintln!("✗ {}", e.user_message());
        eprintln!("  {}", e);
        process::exit(1);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn run(args: &[String], store: JsonFileStore) -> Result<(), VitaeError> {
    if args.iter().any(|a| a == "--list") {
        for record in store.list()? {
            println!(
                "{}\t{}\t{}\t{}",
                record.id,
                record.name,
                record.data.selected_template,
                record.updated_at.to_rfc3339()
            );
        }
        return Ok(());
    }

    let config = match flag_value(args, "--config") {
        Some(path) => serde_json::from_str::<LayoutConfig>(&fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };

    let out_dir = PathBuf::from(flag_value(args, "-o").unwrap_or("."));
    fs::create_dir_all(&out_dir)?;

    let records: Vec<ResumeRecord> = match flag_value(args, "--id") {
        Some(id) => vec![store.get(&RecordId::parse(id))?],
        None => store.list()?,
    };
    if records.is_empty() {
        eprintln!("No saved resumes in {}", store.path().display());
        return Ok(());
    }

    for record in &records {
        let (path, document) = vitae::export(record, &config, &out_dir)?;
        for (section, outcome) in &document.report.sections {
            if *outcome == SectionOutcome::Partial {
                warn!(resume = %record.name, %section, "section did not fit the page");
            }
        }
        eprintln!("✓ Written {} bytes to {}", document.bytes.len(), path.display());
    }
    Ok(())
}

fn example_store_json() -> &'static str {
    r##"[
  {
    "id": 1718000000000,
    "name": "Ada Lovelace",
    "createdAt": "2024-06-10T09:00:00.000Z",
    "updatedAt": "2024-06-12T17:30:00.000Z",
    "data": {
      "name": "Ada Lovelace",
      "email": "ada@example.com",
      "phone": "+44 20 7946 0000",
      "country": "United Kingdom",
      "summary": "Mathematician and writer, known for work on the Analytical Engine and for the first published algorithm intended to be carried out by such a machine.",
      "education": [
        {
          "type": "college",
          "institution": "University of London",
          "degree": "Private tuition",
          "course": "Mathematics",
          "cgpa": "9.4",
          "fromYear": "1832",
          "toYear": "1835",
          "pursuing": false
        },
        {
          "type": "school",
          "institution": "Home schooling",
          "board": "Private",
          "percentage": "95",
          "fromYear": "1820",
          "toYear": "1832",
          "pursuing": false
        }
      ],
      "projects": [
        {
          "name": "Notes on the Analytical Engine",
          "fromDate": "1842-09",
          "toDate": "1843-08",
          "details": "Translated Menabrea's memoir and added notes three times its length, including a method for computing Bernoulli numbers."
        },
        {
          "name": "Flying machine study",
          "fromDate": "1828-01",
          "details": "Surveyed bird anatomy and materials for a steam-powered flying machine."
        }
      ],
      "skills": ["Mathematics", "Analysis", "", "Technical writing"],
      "certificates": [
        { "name": "Royal Society reading privileges", "link": "https://royalsociety.org" },
        { "name": "", "link": "https://example.com/ignored" }
      ],
      "selectedTemplate": "template1"
    }
  },
  {
    "id": 1718000000001,
    "name": "Ada Lovelace two column",
    "data": {
      "name": "Ada Lovelace",
      "email": "ada@example.com",
      "skills": ["C++"],
      "selectedTemplate": "template2"
    }
  }
]
"##
}
