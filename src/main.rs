use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use mdblocks::{Config, MarkdownBlock, ParseError, clear, extract_plain_text, outline, parse};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = mdblocks::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn invalid_data(err: ParseError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

fn parse_file(file: &Option<PathBuf>, cfg: Config) -> io::Result<Vec<MarkdownBlock>> {
    let input = read_all(file.as_ref())?;
    parse(&input, Some(cfg)).map_err(invalid_data)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, json } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let blocks = parse_file(&file, cfg)?;

            if json {
                let out = serde_json::to_string_pretty(&blocks)?;
                println!("{out}");
            } else {
                print!("{}", outline(&blocks));
            }
            Ok(())
        }
        Commands::Text { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let blocks = parse_file(&file, cfg)?;
            print!("{}", extract_plain_text(&blocks));
            Ok(())
        }
        Commands::Clear { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let out = clear(&input, Some(cfg)).map_err(invalid_data)?;
            print!("{out}");
            Ok(())
        }
        Commands::Search {
            query,
            file,
            case_sensitive,
        } => {
            let mut cfg = load_config(cli.config.as_deref(), &file)?;
            if case_sensitive {
                cfg.search.case_sensitive = true;
            }
            let search_cfg = cfg.search.clone();
            let blocks = parse_file(&file, cfg)?;
            let hits = mdblocks::search(&blocks, &query, &search_cfg);

            for hit in &hits {
                println!("{}..{}", hit.range.start, hit.range.end);
                for fragment in &hit.fragments {
                    println!(
                        "  block {} {}..{}",
                        fragment.block, fragment.start, fragment.end
                    );
                }
            }
            log::info!("{} match(es)", hits.len());
            Ok(())
        }
    }
}
