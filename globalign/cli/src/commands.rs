use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use globalign_alignment_rs::pairwise::nw;
use globalign_alignment_rs::pairwise::scoring::{self, gaps::Affine, Delegate, SubstitutionMatrix};
use globalign_io_rs::compression::decode;
use globalign_io_rs::{fasta, matrix, ReadRecord};
use globalign_rank_rs::{report, Ranking};

use crate::args::{AlignArgs, PairArgs, ScoringArgs};

type Engine = nw::Engine<f64, Delegate<f64, SubstitutionMatrix<f64>, Affine<f64>>>;

fn engine(args: &ScoringArgs) -> Result<Engine> {
    let gaps = args.gaps()?;
    let matrix = matrix::read(&args.matrix)?;
    Ok(nw::Engine::new(scoring::compose(matrix, gaps)))
}

fn first_record(path: &Path) -> Result<fasta::Record> {
    let mut reader = fasta::Reader::from_path(path, &decode::Config::infer_from_path(path))?;
    let mut record = fasta::Record::default();
    let found = reader
        .read_record(&mut record)
        .wrap_err_with(|| format!("Failed to parse FASTA file {}", path.display()))?;
    ensure!(found, "FASTA file {} doesn't contain any records", path.display());
    Ok(record)
}

pub fn align(args: AlignArgs) -> Result<()> {
    let engine = engine(&args.scoring)?;
    let query = first_record(&args.query)?;
    let targets = args
        .target
        .iter()
        .map(|path| first_record(path).map(|record| (record.name().to_string(), record)))
        .collect::<Result<Vec<_>>>()?;

    let ranking = match args.num_threads {
        0 => Ranking::build(&engine, &query, &targets)?,
        threads => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| Ranking::build(&engine, &query, &targets))?,
    };

    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
            report::write(&ranking, query.name(), BufWriter::new(file))?;
            log::info!("Report written to {}", path.display());
        }
        None => report::write(&ranking, query.name(), std::io::stdout().lock())?,
    }
    Ok(())
}

pub fn pair(args: PairArgs) -> Result<()> {
    let engine = engine(&args.scoring)?;
    let first = first_record(&args.first)?;
    let second = first_record(&args.second)?;
    let alignment = engine.align(&first, &second)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{} vs {}", first.name(), second.name())?;
    writeln!(stdout, "Score: {:.1}", alignment.score())?;
    writeln!(stdout, "{}", alignment.seq1())?;
    writeln!(stdout, "{}", alignment.seq2())?;
    writeln!(stdout, "RLE: {}", alignment.rle())?;
    writeln!(stdout, "Identity: {:.1}%", alignment.identity() * 100.0)?;
    Ok(())
}
