use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use model::date_times::now;

const DEFAULT_INSTANCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/alke_parking.json");

fn main() {
    if let Err(error) = internal::logging::init_std_out_logging() {
        eprintln!("Logging not initialized: {}", error);
    }

    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INSTANCE);

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            println!("Error: {}", error);
            println!("{}", usage(&args));
            std::process::exit(1)
        }
    };

    let mut input_data = String::new();
    if let Err(error) = file.read_to_string(&mut input_data) {
        println!("Error: {}", error);
        std::process::exit(1)
    }
    let input_data: serde_json::Value = match serde_json::from_str(&input_data) {
        Ok(value) => value,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    };
    println!("\n---------- RUN: {} ----------", path);

    let output = match internal::run(input_data, now()) {
        Ok(output) => output,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    };

    println!("\nThe list of plate of vehicles are");
    if let Some(parked) = output["lot"]["parked"].as_array() {
        for plate in parked {
            println!("{}", plate.as_str().unwrap_or_default());
        }
    }

    // output path with sub-directory creation
    let output_dir_name = "output";
    let output_path = match ensure_output_path(path, output_dir_name) {
        Ok(output_path) => output_path,
        Err(error) => {
            println!("Error creating output directory: {}", error);
            std::process::exit(1)
        }
    };
    let written = File::create(&output_path)
        .map_err(|error| error.to_string())
        .and_then(|file| {
            serde_json::to_writer_pretty(file, &output).map_err(|error| error.to_string())
        });
    if let Err(error) = written {
        println!("Error writing {}: {}", output_path, error);
        std::process::exit(1)
    }

    std::process::exit(0)
}

fn usage(args: &[String]) -> String {
    let program = args.first().map(String::as_str).unwrap_or("parking_day");
    format!("Usage: {} [<instance_file>]", program)
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> std::io::Result<String> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("instance.json");
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
