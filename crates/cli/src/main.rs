//! Tesseract CLI application entry point
//!
//! This is the minimal main entry point that delegates to the library.

use clap::Parser;

fn main() {
    // Configure miette for terminal error reporting
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = tesseract::Cli::parse();

    if let Err(e) = tesseract::run(cli) {
        let report = miette::Report::msg(format!("{e:#}"));
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
