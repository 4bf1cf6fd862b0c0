use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use photofilter::shell::{run_console, run_shell};
use photofilter::{process_file, Config, FilterRegistry, Session};

#[derive(FromArgs)]
/// Apply grayscale, blur, edge_enhance, invert or sepia to an image
struct Args {
    /// directory for filtered images (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// downsample factor of the blur filter
    #[argh(option, default = "3")]
    blur_strength: u32,

    /// do not open the result in an image viewer
    #[argh(switch)]
    no_preview: bool,

    #[argh(subcommand)]
    mode: Mode,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Mode {
    Apply(ApplyArgs),
    Console(ConsoleArgs),
    Shell(ShellArgs),
}

#[derive(FromArgs)]
/// Filter one image and exit
#[argh(subcommand, name = "apply")]
struct ApplyArgs {
    /// path to the input image
    #[argh(positional)]
    image_path: PathBuf,

    /// filter name
    #[argh(positional)]
    filter: String,
}

#[derive(FromArgs)]
/// Prompt for an image path and a filter
#[argh(subcommand, name = "console")]
struct ConsoleArgs {}

#[derive(FromArgs)]
/// Interactive session: open images and apply filters
#[argh(subcommand, name = "shell")]
struct ShellArgs {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    let config = Config {
        output_dir: args.output_dir,
        blur_strength: args.blur_strength,
        preview: !args.no_preview,
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    log::debug!("{config:?}");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let result = match args.mode {
        Mode::Apply(apply) => {
            let registry = FilterRegistry::new();
            match process_file(&config, &registry, &apply.image_path, &apply.filter) {
                Ok(result) => {
                    println!("Saved as '{}'", result.output_path.display());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Mode::Console(_) => run_console(&config, &mut input, &mut output),
        Mode::Shell(_) => run_shell(&mut Session::new(config), &mut input, &mut output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("terminal i/o failed: {e}");
            ExitCode::FAILURE
        }
    }
}
