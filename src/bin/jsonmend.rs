fn main() {
    if let Err(e) = jsonmend::cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
