// Ensina: compiler front end and viewer for a small teaching language

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ensina::config::{CliArgs, InteractiveCommand, Mode, Options};
use ensina::pipeline::{compile, CompileReport};
use ensina::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options] <file>", program_name);
    eprintln!("       {} --interactive [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -b, --batch              Print every report section instead of opening the viewer");
    eprintln!("  -i, --interactive        Read programs from stdin; a line 'OK' compiles, 'FIM' quits");
    eprintln!("      --keep-comments      Keep '#' comments in the AST and translations");
    eprintln!("      --max-iterations N   Iterations allowed per loop (default 1000)");
}

fn read_source(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }
    Ok(fs::read_to_string(path)?)
}

fn compile_logged(source: &str, options: &Options) -> CompileReport {
    eprintln!("Compiling {} line(s)...", source.lines().count());
    let report = compile(source, options);
    eprintln!("Found {} token(s).", report.tokens.len());
    match report.failed_stage {
        None => eprintln!("Compiled successfully."),
        Some(stage) => eprintln!(
            "Stopped during {} with {} error(s).",
            stage,
            report.diagnostics().len()
        ),
    }
    report
}

fn print_section(out: &mut impl Write, title: &str, body: &str) -> io::Result<()> {
    writeln!(out, "== {} ==", title)?;
    if body.trim().is_empty() {
        writeln!(out, "(empty)")?;
    } else {
        write!(out, "{}", body)?;
        if !body.ends_with('\n') {
            writeln!(out)?;
        }
    }
    writeln!(out)
}

fn print_report(report: &CompileReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_section(&mut out, "Tokens", &report.token_listing())?;
    if !report.diagnostics().is_empty() {
        print_section(&mut out, "Errors", &report.diagnostics().join("\n\n"))?;
    }
    if report.ast.is_some() {
        print_section(&mut out, "AST", &report.tree)?;
    }
    if report.symbols.is_some() {
        print_section(&mut out, "Symbol table", &report.symbol_listing())?;
    }
    if report.ast.is_some() {
        print_section(&mut out, "Postfix", &report.postfix)?;
        print_section(&mut out, "Python", &report.python)?;
    }
    out.flush()
}

fn run_viewer(path: &str, options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Reading {}...", path);
    let source = read_source(path)?;
    let report = compile_logged(&source, options);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_batch(path: &str, options: &Options) -> Result<bool, Box<dyn std::error::Error>> {
    eprintln!("Reading {}...", path);
    let source = read_source(path)?;
    let report = compile_logged(&source, options);
    print_report(&report)?;
    Ok(report.succeeded())
}

fn run_interactive(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Type a program. A line 'OK' compiles it, 'FIM' quits.");

    let stdin = io::stdin();
    let mut buffer = String::new();

    for line in stdin.lock().lines() {
        let line = line?;
        match InteractiveCommand::parse(&line) {
            Some(InteractiveCommand::Quit) => break,
            Some(InteractiveCommand::Compile) => {
                let report = compile_logged(&buffer, options);
                print_report(&report)?;
                buffer.clear();
            }
            None => {
                buffer.push_str(&line);
                buffer.push('\n');
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "ensina".to_string());

    let cli = match CliArgs::parse(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    match &cli.mode {
        Mode::Viewer(path) => run_viewer(path, &cli.options)?,
        Mode::Batch(path) => {
            if !run_batch(path, &cli.options)? {
                std::process::exit(1);
            }
        }
        Mode::Interactive => run_interactive(&cli.options)?,
    }

    Ok(())
}
