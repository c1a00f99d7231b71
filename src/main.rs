fn main() {
    if let Err(e) = softsell::cli::main() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
