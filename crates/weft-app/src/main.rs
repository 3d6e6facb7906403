//! weft terminal entry point.
//!
//! Usage: `weft <url> [Key=Value ...]`
//!
//! Tokens after the URL become caller request headers. Scrolling is
//! driven by stdin lines: `j`/`k` scroll down/up, `d`/`u` page
//! down/up, `q` quits. The `WEFT_CONFIG` env var may point at a TOML
//! view-config overlay.

mod render;

use anyhow::Result;

use render::TermRenderer;
use weft_browser::{BrowserView, Headers, ViewConfig, parse_view_config};
use weft_net::RustlsTlsProvider;
use weft_types::input::InputEvent;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!("starting weft ({}x{})", config.width, config.height);

    let mut args = std::env::args().skip(1);
    let url = match args.next().or_else(|| config.home_url.clone()) {
        Some(url) => url,
        None => {
            eprintln!("usage: weft <url> [Key=Value ...]");
            std::process::exit(2);
        },
    };
    let extra = parse_header_tokens(args)?;

    let mut renderer = TermRenderer::new(&config);
    let mut view = BrowserView::with_tls(config, Box::new(RustlsTlsProvider::new()));
    view.load(&url, &extra)?;
    view.draw(&mut renderer);

    // Key events arrive as stdin lines; each one is handled to
    // completion (including its redraw) before the next is read.
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let Some(event) = map_key(line.trim()) else {
            continue;
        };
        if event == InputEvent::Quit {
            break;
        }
        view.handle_event(event, &mut renderer);
    }

    Ok(())
}

/// Read the optional TOML overlay named by `WEFT_CONFIG`.
fn load_config() -> Result<ViewConfig> {
    match std::env::var("WEFT_CONFIG") {
        Ok(path) => {
            let contents = std::fs::read_to_string(&path)?;
            Ok(parse_view_config(&contents)?)
        },
        Err(_) => Ok(ViewConfig::default()),
    }
}

/// `Key=Value` tokens become caller request headers.
fn parse_header_tokens<I: IntoIterator<Item = String>>(tokens: I) -> Result<Headers> {
    let mut extra = Headers::new();
    for token in tokens {
        let Some((name, value)) = token.split_once('=') else {
            anyhow::bail!("bad header token {token:?} (expected Key=Value)");
        };
        extra.set(name, value);
    }
    Ok(extra)
}

fn map_key(key: &str) -> Option<InputEvent> {
    match key {
        "j" => Some(InputEvent::ScrollDown),
        "k" => Some(InputEvent::ScrollUp),
        "d" => Some(InputEvent::PageDown),
        "u" => Some(InputEvent::PageUp),
        "q" => Some(InputEvent::Quit),
        _ => None,
    }
}
