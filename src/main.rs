mod average;
mod load;
mod plot;
mod report;

use anyhow::Result;
use bpaf::Bpaf;
use std::io::Write;
use std::path::PathBuf;

#[derive(Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Where to write the rendered plot.  Defaults to the input name with
    /// "csv" replaced by "svg".
    #[bpaf(short, long, argument("PATH"))]
    out: Option<PathBuf>,
    /// CSV file of batch,x,y,val rows.  Prompted for when omitted.
    #[bpaf(positional("FILE"))]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run(options().run()) {
        Ok(()) => (),
        Err(e) => {
            // A missing input file ends the run with a fixed message and a
            // clean exit; anything else is a real error.
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::NotFound {
                    println!("Could not find file.");
                    return;
                }
            }
            eprintln!("Error: {}", e);
            std::process::exit(1)
        }
    }
}

fn run(opts: Options) -> Result<()> {
    let input = match opts.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let data = load::load_samples(&input)?;
    let averages = average::batch_averages(&data);
    report::print_report(&averages, std::io::stdout().lock())?;
    let out = opts.out.unwrap_or_else(|| plot::artifact_path(&input));
    plot::render(&data, &out)?;
    println!("File created, Goodbye!");
    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Which csv file should be analyzed? ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
