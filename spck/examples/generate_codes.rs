#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "cli")]
use spck::{build_code, write_code_file, CodeParams};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version)]
#[command(
    about = "SPCK code generator - build systematic LDPC parity-check code files for a list of information-symbol counts"
)]
struct Cli {
    /// Information-symbol counts to generate codes for
    #[arg(long, value_delimiter = ',', default_value = "4,16,64,256")]
    k: Vec<usize>,

    /// Nominal column weight
    #[arg(long, default_value_t = 6)]
    col_weight: usize,

    /// Nominal row weight
    #[arg(long, default_value_t = 8)]
    row_weight: usize,

    /// Seed for the random construction
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory for code<k>.txt files
    #[arg(long, default_value = ".")]
    out_dir: std::path::PathBuf,

    /// Also write a JSON description next to each code file
    #[arg(long)]
    describe: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    for &k in &cli.k {
        let params = CodeParams::new(k, cli.col_weight, cli.row_weight);
        let start = std::time::Instant::now();
        let code = build_code(params, &mut rng)?;
        println!(
            "k={k}: n={}, checks={}, built in {:.2?}",
            code.n,
            code.check_count(),
            start.elapsed()
        );

        let path = cli.out_dir.join(format!("code{k}.txt"));
        write_code_file(&path, &code.rows)?;
        println!("saved {}", path.display());

        #[cfg(feature = "serde")]
        if cli.describe {
            let description = spck::CodeDescription::from_rows(&code.rows, code.n);
            let json_path = cli.out_dir.join(format!("code{k}.json"));
            spck::write_description(&json_path, &description)?;
            println!("saved {}", json_path.display());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example generate_codes");
    std::process::exit(1);
}
