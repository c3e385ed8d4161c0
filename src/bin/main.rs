use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rpsl_parser::{KeyGrammar, RpslObject, RpslParser, ValidationError};
use serde_json::json;

/// rpsl-parser-cli is a simple cli tool that allow parsing of RPSL files, such as IRR
/// database dumps.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// File path to an RPSL file, local or remote.
    #[clap(name = "FILE")]
    file_path: PathBuf,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,

    /// Count RPSL objects
    #[clap(short, long)]
    count: bool,

    /// Accept `*` in attribute keys
    #[clap(short, long)]
    wildcard_keys: bool,

    #[clap(flatten)]
    checks: Checks,
}

#[derive(Parser, Debug)]
struct Checks {
    /// Only keep objects of the given class, e.g. `route` or `mntner`
    #[clap(long)]
    class: Option<String>,

    /// Attribute that must appear at least once
    #[clap(short = 'r', long)]
    require: Vec<String>,

    /// Attribute that may appear at most once
    #[clap(short = 's', long)]
    single: Vec<String>,
}

impl Checks {
    fn validate(&self, obj: &RpslObject) -> Result<(), ValidationError> {
        for key in &self.require {
            obj.ensure_at_least_one(key)?;
        }
        for key in &self.single {
            obj.ensure_at_most_one(key)?;
        }
        Ok(())
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let file_path = opts.file_path.to_string_lossy();

    let mut parser = match RpslParser::new(&file_path) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    if opts.wildcard_keys {
        parser = parser.with_key_grammar(KeyGrammar::Wildcard);
    }

    let mut stdout = std::io::stdout();
    let mut count = 0;
    for obj in parser {
        let obj = match obj {
            Ok(obj) => obj,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        if let Some(class) = &opts.checks.class {
            if obj.ensure_class(class).is_err() {
                continue;
            }
        }
        if let Err(err) = opts.checks.validate(&obj) {
            eprintln!(
                "skipping {} '{}': {}",
                obj.class().unwrap_or_default(),
                obj.attributes()
                    .first()
                    .map(|attr| attr.value())
                    .unwrap_or_default(),
                err
            );
            continue;
        }

        count += 1;
        if opts.count {
            continue;
        }

        let output_str = if opts.json {
            let val = json!(obj);
            if opts.pretty {
                serde_json::to_string_pretty(&val).unwrap()
            } else {
                val.to_string()
            }
        } else {
            format!("{}\n", obj)
        };
        if let Err(e) = writeln!(stdout, "{}", &output_str) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    }

    if opts.count {
        println!("total objects: {}", count);
    }
}
