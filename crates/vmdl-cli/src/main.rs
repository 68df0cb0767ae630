use std::fs::{self, File};
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    #[value(alias = "text")]
    Vmdl,
}

#[derive(Parser, Debug)]
#[command(name = "vmdl", about = "CLI for VMDL ↔ JSON conversion", version)]
struct Args {
    /// Encode JSON to VMDL (default decodes VMDL)
    #[arg(short, long)]
    encode: bool,

    /// Output format when decoding
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Reject unrecognized lines and inconsistent indentation
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Print the value at a dot-separated key path instead of the document
    #[arg(short, long = "get", value_name = "PATH")]
    get: Vec<String>,

    /// Write the result to a file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let out = if args.encode {
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        vmdl::encode_to_string(&value)?
    } else {
        let options = vmdl::Options {
            strict: args.strict,
        };
        let doc = vmdl::decode_with_options(&buf, &options)?;
        tracing::debug!(entries = doc.len(), "decoded input");
        if !args.get.is_empty() {
            render_lookups(&doc, &args.get)?
        } else {
            match args.format {
                FormatArg::Json if args.pretty => serde_json::to_string_pretty(&doc)? + "\n",
                FormatArg::Json => serde_json::to_string(&doc)? + "\n",
                FormatArg::Vmdl => vmdl::encode(&doc),
            }
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", out),
    }

    Ok(())
}

fn render_lookups(doc: &vmdl::Map, paths: &[String]) -> Result<String> {
    let mut out = String::new();
    for path in paths {
        let keys: Vec<&str> = path.split('.').collect();
        match vmdl::value::lookup(doc, &keys) {
            Some(vmdl::Value::Leaf(s)) => {
                out.push_str(s);
                out.push('\n');
            }
            Some(vmdl::Value::Section(map)) => out.push_str(&vmdl::encode(map)),
            None => bail!("no value at `{}`", path),
        }
    }
    Ok(out)
}
