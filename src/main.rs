use std::{fs::File, io::BufWriter, path::PathBuf, process};

use clap::Parser;
use fplot::{limits::Limits, parse_expression, plot::render_graph};

/// fplot draws a single-variable mathematical expression as a one-page
/// PostScript plot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to plot, in the single variable x. Enclose it in quotes
    /// if it contains spaces.
    expression: String,

    /// Path of the PostScript file to write.
    output: PathBuf,

    /// The visible window as "xmin:xmax:ymin:ymax".
    #[arg(default_value = "-10:10:-10:10")]
    limits: String,
}

fn main() {
    let args = Args::parse();

    println!("Expression: {}", args.expression);

    let limits: Limits = args.limits.parse().unwrap_or_else(|e| {
                                                eprintln!("Error: {e}");
                                                eprintln!("Correct usage: <xmin>:<xmax>:<ymin>:<ymax>");
                                                process::exit(4);
                                            });

    let output_file = File::create(&args.output).unwrap_or_else(|_| {
                                                    eprintln!("Failed to open the output file '{}'.",
                                                              args.output.display());
                                                    process::exit(3);
                                                });

    let expression = parse_expression(&args.expression).unwrap_or_else(|e| {
                                                           eprintln!("{e}");
                                                           process::exit(2);
                                                       });

    let mut writer = BufWriter::new(output_file);
    if let Err(e) = render_graph(&mut writer, &limits, &expression) {
        eprintln!("Failed to write the plot: {e}");
        process::exit(3);
    }
}
