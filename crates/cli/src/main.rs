//! `cbdocs` binary.

fn main() {
    std::process::exit(cbdocs_cli::run_cli(std::env::args().collect()));
}
