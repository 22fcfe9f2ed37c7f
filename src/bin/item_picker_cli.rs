use clap::Parser;
use item_picker::{
    cli::{run_cli, CliArgs},
    init,
};

fn main() {
    let args = CliArgs::parse();
    init();

    if let Err(err) = run_cli(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
