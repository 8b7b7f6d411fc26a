//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{fs, io};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use huffpar::tools::cli::{huffopts_init, HuffOpts, InputKind, Mode};
use huffpar::tools::symbols::{from_bytes, from_text};
use huffpar::tools::timer::Timer;
use huffpar::{encode, parallel_compress, HuffError, Symbol};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<(), io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let options = huffopts_init();
    let mut timer = Timer::new();

    let fname = options
        .file
        .as_ref()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "No input file given."))?;
    let raw = fs::read(fname)?;
    let symbols = match options.input {
        InputKind::Bytes => from_bytes(&raw),
        InputKind::Text => from_text(
            std::str::from_utf8(&raw)
                .map_err(|e| HuffError::InvalidInput(format!("{} is not UTF-8: {}", fname, e)))?,
        ),
    };
    info!("Input {} symbols", symbols.len());
    timer.mark("file read");

    //----- Figure how what we need to do and go do it
    let output = match options.op_mode {
        Mode::Sequential => sequential(&symbols, &options, &mut timer)?,
        Mode::Parallel => parallel(&symbols, &options, &mut timer)?,
    };

    if output == symbols {
        info!("Success");
    } else {
        error!("Decoded output does not match {}", fname);
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Round trip mismatch.",
        ));
    }
    info!("Total took {:?}", timer.total());
    Ok(())
}

/// Encode and decode the whole input on this thread.
fn sequential(
    symbols: &[Symbol],
    opts: &HuffOpts,
    timer: &mut Timer,
) -> Result<Vec<Symbol>, HuffError> {
    let encoded = encode(symbols, opts.alphabet)?;
    info!("Compressed length: {}", encoded.bits.len() / 8);
    timer.mark("compress");

    let output = encoded.decode(symbols.len())?;
    timer.mark("decompress");
    Ok(output)
}

/// Encode and decode the input in partitions, one worker each.
fn parallel(
    symbols: &[Symbol],
    opts: &HuffOpts,
    timer: &mut Timer,
) -> Result<Vec<Symbol>, HuffError> {
    let encoded = parallel_compress(symbols, opts.alphabet, opts.partitions)?;
    for part in &encoded.parts {
        info!("Partition {}: {} symbols", part.index, part.length);
    }
    info!("Compressed length: {}", encoded.bit_len() / 8);
    timer.mark("compress");

    let output = encoded.decode()?;
    timer.mark("decompress");
    Ok(output)
}
