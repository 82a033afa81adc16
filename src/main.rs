use log::{debug, LevelFilter};
use mermaid_patch::presets::template_for;
use mermaid_patch::svg::find_element_by_id;
use mermaid_patch::{Dialect, Error, RenderOptions, Result, ShapeKind};
use std::fs;
use std::io::{self, Read};
use std::str::FromStr;

fn print_help() {
    println!("mermaid-patch - Inspect and edit Mermaid diagram source");
    println!();
    println!("Usage: mermaid-patch [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Reads the diagram from --file or stdin and writes the result to stdout.");
    println!();
    println!("Commands:");
    println!("  detect                    Print the diagram dialect");
    println!("  caps                      Print the dialect's edit capabilities as JSON");
    println!("  ids                       List node ids written with a shape");
    println!("  find <id>                 Print the node definition as JSON");
    println!("  label <id> <text>         Change an element's label");
    println!("  shape <id> <shape>        Change a node's shape");
    println!("  fill <id> <color|none>    Set or clear a node's fill color");
    println!("  stroke <id> <color|none>  Set or clear a node's border color");
    println!("  delete <id>               Remove a node and its edges");
    println!("  add                       Append a new node");
    println!("  edge <from> <to>          Append an edge");
    println!("  direction                 Toggle between TD and LR");
    println!("  template <dialect>        Print a starter diagram");
    println!("  config [options.json]     Print the renderer configuration");
    println!("  pick <svg-file> <id>      Identify the element clicked in a rendered SVG");
    println!();
    println!("Options:");
    println!("  -h, --help               Show this help message");
    println!("  -f, --file <PATH>        Read the diagram from PATH instead of stdin");
    println!("      --log-level <LEVEL>  off, error, warn, info, debug or trace (default: warn)");
    println!();
    println!("Example:");
    println!("  printf 'graph TD\\n  A[Start]' | mermaid-patch shape A circle");
}

/// Options that precede the command
struct Cli {
    help: bool,
    file: Option<String>,
    log_level: String,
    command: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Cli> {
    let mut cli = Cli {
        help: false,
        file: None,
        log_level: "warn".to_string(),
        command: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" if cli.command.is_empty() => cli.help = true,
            "-f" | "--file" if cli.command.is_empty() => {
                let path = iter
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{} needs a path", arg)))?;
                cli.file = Some(path.clone());
            }
            "--log-level" if cli.command.is_empty() => {
                let level = iter
                    .next()
                    .ok_or_else(|| Error::Usage("--log-level needs a value".to_string()))?;
                cli.log_level = level.clone();
            }
            _ => cli.command.push(arg.clone()),
        }
    }
    Ok(cli)
}

fn read_source(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn arg<'a>(command: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    command
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::Usage(format!("{} needs <{}>", command[0], what)))
}

/// `none` clears a color
fn color_arg(value: &str) -> Option<&str> {
    if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value)
    }
}

/// Commands that do not read a diagram
fn run_standalone(command: &[String]) -> Result<Option<String>> {
    match command[0].as_str() {
        "template" => {
            let name = arg(command, 1, "dialect")?;
            let dialect =
                Dialect::from_name(name).ok_or_else(|| Error::UnknownDialect(name.to_string()))?;
            Ok(Some(template_for(dialect).to_string()))
        }
        "config" => {
            let options = match command.get(1) {
                Some(path) => RenderOptions::from_json(&fs::read_to_string(path)?)?,
                None => RenderOptions::default(),
            };
            Ok(Some(serde_json::to_string_pretty(&options.to_config())?))
        }
        _ => Ok(None),
    }
}

fn run(command: &[String], source: &str) -> Result<String> {
    let name = command[0].as_str();
    let output = match name {
        "detect" => mermaid_patch::detect(source).to_string(),
        "caps" => {
            let caps = mermaid_patch::capabilities_of(mermaid_patch::detect(source));
            serde_json::to_string_pretty(&caps)?
        }
        "ids" => mermaid_patch::get_all_node_ids(source).join("\n"),
        "find" => {
            let id = arg(command, 1, "id")?;
            serde_json::to_string_pretty(&mermaid_patch::definition_or_default(source, id))?
        }
        "label" => {
            let id = arg(command, 1, "id")?;
            let new_label = arg(command, 2, "text")?;
            let dialect = mermaid_patch::detect(source);
            let old_label = mermaid_patch::current_label(source, dialect, id);
            mermaid_patch::apply_label_edit(source, dialect, id, &old_label, new_label)
        }
        "shape" => {
            let id = arg(command, 1, "id")?;
            let shape_name = arg(command, 2, "shape")?;
            let shape = ShapeKind::from_name(shape_name)
                .ok_or_else(|| Error::UnknownShape(shape_name.to_string()))?;
            mermaid_patch::update_shape(source, id, shape)
        }
        "fill" => {
            let id = arg(command, 1, "id")?;
            let color = arg(command, 2, "color")?;
            mermaid_patch::set_fill_color(source, id, color_arg(color))
        }
        "stroke" => {
            let id = arg(command, 1, "id")?;
            let color = arg(command, 2, "color")?;
            mermaid_patch::set_stroke_color(source, id, color_arg(color))
        }
        "delete" => mermaid_patch::delete_node(source, arg(command, 1, "id")?),
        "add" => {
            let added = mermaid_patch::add_node(source);
            eprintln!("added {}", added.id);
            added.text
        }
        "edge" => {
            let from = arg(command, 1, "from")?;
            let to = arg(command, 2, "to")?;
            mermaid_patch::add_edge(source, from, to)
        }
        "direction" => mermaid_patch::toggle_direction(source),
        "pick" => {
            let svg_path = arg(command, 1, "svg-file")?;
            let element_id = arg(command, 2, "id")?;
            let svg = fs::read_to_string(svg_path)?;
            let doc = roxmltree::Document::parse(&svg)?;
            let clicked = find_element_by_id(&doc, element_id)
                .ok_or_else(|| Error::ElementNotFound(element_id.to_string()))?;
            match mermaid_patch::pick(clicked, source) {
                Some(info) => serde_json::to_string_pretty(&info)?,
                None => "null".to_string(),
            }
        }
        other => return Err(Error::Usage(format!("unknown command \"{}\", see --help", other))),
    };
    Ok(output)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if args.is_empty() || cli.help {
        print_help();
        return;
    }

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if cli.command.is_empty() {
        eprintln!("Error: no command given, see --help");
        std::process::exit(2);
    }
    debug!("running {:?}", cli.command);

    let result = run_standalone(&cli.command).and_then(|output| match output {
        Some(output) => Ok(output),
        None => {
            let source = read_source(cli.file.as_deref())?;
            run(&cli.command, &source)
        }
    });

    match result {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
