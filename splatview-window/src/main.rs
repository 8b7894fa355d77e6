use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use splatview_window::ViewerOptions;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(scene) = args.next().map(PathBuf::from) else {
        eprintln!("usage: splatview <scene.ply> [options.json]");
        return ExitCode::from(2);
    };

    let options = match args.next().map(PathBuf::from) {
        Some(path) => match ViewerOptions::load(&path) {
            Ok(options) => options,
            Err(err) => {
                eprintln!("splatview: {err}");
                return ExitCode::from(2);
            }
        },
        None => ViewerOptions::default(),
    };

    if let Err(err) = splatview_window::run(&scene, options) {
        eprintln!("splatview failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
