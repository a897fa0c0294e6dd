use clap::Parser;
use tracing_subscriber::EnvFilter;
use unda_zwave::{ClassDecoder, Decoder, FrameCursor, PrefixedDecoder};

#[derive(Parser)]
#[command(version)]
struct Args {
    #[arg(env, long, default_value_t = 0)]
    offset: usize,
    #[arg(env, long)]
    prefixed: bool,
    #[arg(env, long)]
    stdin: bool,
    frames: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(&[("cli", "info"), ("unda_zwave", "info")]);

    let mut buffers = args.frames.clone();
    if args.stdin {
        for line in std::io::stdin().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            buffers.push(line);
        }
    }

    let mut failures = 0;
    for buffer in &buffers {
        match inspect(buffer, args.offset, args.prefixed) {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Err(error) => {
                tracing::warn!("failed to decode {buffer:?}: {error}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn inspect(
    input: &str,
    offset: usize,
    prefixed: bool,
) -> color_eyre::Result<Vec<String>> {
    let bytes = cli::parse_hex(input)?;
    let mut lines = Vec::new();
    if prefixed {
        for decoded in FrameCursor::new(&bytes, offset, PrefixedDecoder) {
            lines.push(cli::render(&decoded?));
        }
    } else {
        let class = bytes.get(offset).copied().unwrap_or(0);
        let decoded = ClassDecoder::for_class(class).decode(&bytes, offset)?;
        lines.push(cli::render(&decoded));
    }
    Ok(lines)
}

fn init_tracing(filter: &[(&str, &str)]) {
    let filter = filter
        .iter()
        .map(|(name, level)| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
