//! Batch outline inference over a directory of fragment streams.
//!
//! Reads every `*.json` fragment file in the input directory (the shape
//! produced by an upstream text extractor: an array of pages, each with a
//! 1-based number and its positioned fragments), infers the outline, and
//! writes one `<stem>.outline.json` per input into the output directory.
//!
//! Usage:
//!   cargo run --release --bin batch_outline
//!   cargo run --release --bin batch_outline -- --input-dir fragments --output-dir outlines

use outline_oxide::fragment::load_pages;
use outline_oxide::outline::detect_outline;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

struct BatchConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
    verbose: bool,
}

impl BatchConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input_dir = PathBuf::from("input");
        let mut output_dir = PathBuf::from("output");
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--input-dir" => {
                    i += 1;
                    if i < args.len() {
                        input_dir = PathBuf::from(&args[i]);
                    }
                },
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = PathBuf::from(&args[i]);
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                _ => {},
            }
            i += 1;
        }

        Self {
            input_dir,
            output_dir,
            verbose,
        }
    }
}

fn discover_fragment_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir.display(), e);
            return files;
        },
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }

    files.sort();
    files
}

fn process_document(input: &Path, output: &Path, verbose: bool) -> outline_oxide::Result<usize> {
    let pages = load_pages(input)?;
    let result = detect_outline(&pages);

    if verbose {
        println!();
        println!("  title:    {:?}", result.title);
        println!("  language: {}", result.language.tag());
        println!("  headings: {}", result.outline.len());
    }

    let json = serde_json::to_string_pretty(&result)?;
    fs::write(output, &json)?;
    Ok(json.len())
}

fn main() {
    env_logger::init();

    let config = BatchConfig::from_args();

    println!("Outline inference batch");
    println!("Input directory:  {}", config.input_dir.display());
    println!("Output directory: {}", config.output_dir.display());

    if let Err(e) = fs::create_dir_all(&config.output_dir) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    let files = discover_fragment_files(&config.input_dir);
    if files.is_empty() {
        eprintln!("\nNo fragment files found in {}", config.input_dir.display());
        std::process::exit(1);
    }

    println!("Found {} documents\n", files.len());

    let mut successful = 0;
    let mut failed = 0;
    let start_time = Instant::now();

    for (i, input) in files.iter().enumerate() {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());
        let output = config.output_dir.join(format!("{}.outline.json", stem));

        print!("[{}/{}] {} ... ", i + 1, files.len(), stem);
        std::io::stdout().flush().ok();

        // One document's failure must not stop the batch.
        match process_document(input, &output, config.verbose) {
            Ok(bytes) => {
                println!("✓ ({} bytes)", bytes);
                successful += 1;
            },
            Err(e) => {
                println!("✗ Error: {}", e);
                failed += 1;
            },
        }
    }

    let elapsed = start_time.elapsed();

    println!("\n{}", "=".repeat(60));
    println!("BATCH COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Total documents: {}", files.len());
    println!("✓ Successful:    {}", successful);
    println!("✗ Failed:        {}", failed);
    println!("Time:            {:.2}s", elapsed.as_secs_f64());
    println!("{}", "=".repeat(60));

    if failed > 0 {
        std::process::exit(1);
    }
}
