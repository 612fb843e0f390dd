use std::io;

use clap::Parser;
use tracing::info;

use crate::library::LoftyProvider;
use crate::session::{DedupError, DedupSession, Prompt};

mod cli;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();

    let mut settings = settings::load_settings();
    args.apply(&mut settings);

    if args.dump_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }
    let (Some(left_dir), Some(right_dir)) = (args.left_dir.as_deref(), args.right_dir.as_deref())
    else {
        return Err("both library roots are required".into());
    };

    if let Err(e) = logging::init(&settings.dedup.log_path) {
        // Warnings are still collected and summarized without a log file.
        eprintln!(
            "album-dupes: cannot write log {}: {e}",
            settings.dedup.log_path.display()
        );
    }
    info!(
        "comparing {} with {}",
        left_dir.display(),
        right_dir.display()
    );

    let width = settings::report_width(&settings.report);
    let provider = LoftyProvider;
    let session = DedupSession::new(&provider, &settings, width);

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    match session.run(left_dir, right_dir, &mut prompt) {
        Ok(summary) => {
            info!(
                "compared {} albums, moved {}",
                summary.compared,
                summary.relocated.len()
            );
            Ok(())
        }
        Err(DedupError::NoAlbums { root }) => {
            println!(
                "No albums found in {}; nothing to compare.",
                root.display()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
