mod app;
mod config;
mod editor;
mod models;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Result, bail};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tokio::time::{Duration, interval};

use app::{App, handle_action, selection, trigger_action};
use config::Config;
use models::{Report, StatusFilter};

struct CliArgs {
    report_path: PathBuf,
    testcase: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut report_path = None;
    let mut testcase = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--testcase" => {
                let Some(name) = args.next() else {
                    bail!("--testcase requires a case name");
                };
                testcase = Some(name);
            }
            _ if report_path.is_none() => report_path = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{}'", arg),
        }
    }

    let Some(report_path) = report_path else {
        bail!("usage: verdict <report.json> [--testcase <name>]");
    };
    Ok(CliArgs {
        report_path,
        testcase,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args()?;
    let workdir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&workdir);
    // Fail before the terminal enters raw mode so the error stays readable.
    let report = Report::load(&cli.report_path)?;

    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, report, config, cli.testcase).await;

    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    report: Report,
    config: Config,
    testcase: Option<String>,
) -> Result<()> {
    let filter = StatusFilter::from_keywords(&config.filter.visible);
    let mut app = App::new(report, filter, config.title);

    if let Some(name) = testcase {
        selection::open_case_link(&mut app, &name);
    }

    let mut tick = interval(Duration::from_millis(200));
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    None => break,
                    Some(Err(e)) => return Err(e.into()),
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = trigger_action(key) {
                            handle_action(&mut app, action);
                        }
                    }
                    Some(Ok(_)) => {}
                }
            }

            _ = tick.tick() => {
                app.notifier.prune_expired();
            }
        }

        if let Some((file, line, col)) = app.pending_editor.take()
            && let Err(e) = editor::open(terminal, &file, line, col)
        {
            app.notifier.error(e.to_string());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
