use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use hotwatch::notify::Event;
use hotwatch::{
    blocking::{Flow, Hotwatch},
    EventKind,
};
use miette::{bail, IntoDiagnostic, Result};

use tack::Assembler;

/// Tack is a convenient assembler toolchain for the Hack assembly language.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Quickly provide a `.asm` file to assemble
    path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a `.hack` binary file from a `.asm` source file
    Assemble {
        /// `.asm` file to assemble
        name: PathBuf,
        /// Destination to output .hack file
        dest: Option<PathBuf>,
    },
    /// Assemble a `.asm` file without writing any output
    Check {
        /// File to check
        name: PathBuf,
    },
    /// Place a watch on a `.asm` file to receive constant assembler updates
    Watch {
        /// `.asm` file to watch
        name: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    use MsgColor::*;
    let args = Args::parse();

    if let Some(command) = args.command {
        match command {
            Command::Assemble { name, dest } => assemble_to_file(&name, dest),
            Command::Check { name } => {
                file_message(Green, "Checking", &name);
                let binary = assemble(&name)?;
                let right = format!("encoded {} instructions", binary.len());
                message(Green, "Success", &right);
                Ok(())
            }
            Command::Watch { name } => {
                if !name.exists() {
                    bail!("File does not exist. Exiting...")
                }
                // Vim breaks if watching a single file
                let folder_path = match name.parent() {
                    Some(pth) if pth.is_dir() => pth.to_path_buf(),
                    _ => Path::new(".").to_path_buf(),
                };

                // Clear screen and move cursor to top left
                print!("\x1B[2J\x1B[2;1H");
                file_message(Green, "Watching", &name);
                message(Cyan, "Help", "press CTRL+C to exit");

                let mut watcher = Hotwatch::new_with_custom_delay(Duration::from_millis(500))
                    .into_diagnostic()?;

                watcher
                    .watch(folder_path, move |event: Event| match event.kind {
                        // Watch remove for vim changes
                        EventKind::Modify(_) | EventKind::Remove(_) => {
                            // Clear screen
                            print!("\x1B[2J\x1B[2;1H");
                            file_message(Green, "Watching", &name);
                            message(Green, "Re-checking", "file change detected");
                            message(Cyan, "Help", "press CTRL+C to exit");

                            // Makes reruns more obvious
                            sleep(Duration::from_millis(50));

                            // Fresh assembler per rebuild so stale variable
                            // slots from the previous pass don't leak in
                            match assemble(&name) {
                                Ok(binary) => {
                                    let right =
                                        format!("encoded {} instructions", binary.len());
                                    message(Green, "Success", &right);
                                }
                                Err(e) => {
                                    println!("\n{:?}", e);
                                }
                            }
                            Flow::Continue
                        }
                        _ => Flow::Continue,
                    })
                    .into_diagnostic()?;
                watcher.run();
                Ok(())
            }
        }
    } else if let Some(path) = args.path {
        assemble_to_file(&path, None)
    } else {
        println!("\n~ tack v{VERSION} ~");
        println!("{}", LOGO.truecolor(255, 183, 197).bold());
        println!("{SHORT_INFO}");
        std::process::exit(0);
    }
}

#[allow(unused)]
enum MsgColor {
    Green,
    Cyan,
    Red,
}

fn file_message(color: MsgColor, left: &str, right: &PathBuf) {
    let right = format!("target {}", right.to_string_lossy());
    message(color, left, &right);
}

fn message(color: MsgColor, left: &str, right: &str) {
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Red => left.red(),
    };
    println!("{left:>12} {right}");
}

/// Read the source file and run it through a fresh assembler.
fn assemble(name: &PathBuf) -> Result<Vec<String>> {
    match name.extension() {
        Some(ext) if ext == "asm" => {}
        Some(_) => bail!("File has unknown extension. Exiting..."),
        None => bail!("File has no extension. Exiting..."),
    }
    let contents = fs::read_to_string(name).into_diagnostic()?;
    Ok(Assembler::new().assemble_source(&contents))
}

/// Assemble `name` and write one binary string per line to the destination,
/// defaulting to the source name with a `.hack` extension.
fn assemble_to_file(name: &PathBuf, dest: Option<PathBuf>) -> Result<()> {
    file_message(MsgColor::Green, "Assembling", name);
    let binary = assemble(name)?;

    let out_file_name = dest.unwrap_or_else(|| name.with_extension("hack"));
    let mut file = File::create(&out_file_name).into_diagnostic()?;
    for instr in &binary {
        writeln!(file, "{instr}").into_diagnostic()?;
    }

    message(MsgColor::Green, "Finished", "emit binary");
    file_message(MsgColor::Green, "Saved", &out_file_name);
    Ok(())
}

const LOGO: &str = r#"
  o8                        8
 o888oo  ooooooo    ooooo8 888  ooo
  888    ooooo888 888      888o888
  888  888    888 888      8888 88o
  8888o 88ooo88 8o 88ooo888 888o o888o"#;

const SHORT_INFO: &str = r"
Welcome to tack, an assembler toolchain for the Hack machine language
from the nand2tetris computer architecture.
Please use `-h` or `--help` to access the usage instructions and documentation.
";

const VERSION: &str = env!("CARGO_PKG_VERSION");
