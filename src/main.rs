mod compare;
mod config;
mod library;
mod runtime;
mod session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
