fn main() {
    if let Err(e) = minute_bucket::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
