fn main() {
    if let Err(e) = ceresc_drv::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
