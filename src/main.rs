fn main() {
    if let Err(e) = graphwalk::walker() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
