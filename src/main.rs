#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    travel_report_rs::cli::run()?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    std::process::exit(1);
}
