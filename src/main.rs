fn main() {
    if let Err(e) = audioyield_lib::run() {
        eprintln!("audioyield failed to start: {}", e);
        std::process::exit(1);
    }
}
