//! Flooring Site - binary entry point
//! Delegates to the library for all app logic.

#[tokio::main]
async fn main() {
    if let Err(e) = flooring_site::run().await {
        eprintln!("server exited: {}", e);
        std::process::exit(1);
    }
}
