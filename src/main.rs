use std::cell::RefCell;
use std::error::Error;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::tty::IsTty;
use ratatui::{Terminal, TerminalOptions, Viewport, prelude::CrosstermBackend};

use stateview::config::Config;
use stateview::logging::init_tracing;
use stateview::ui::{Preview, render};
use stateview::{Component, Counter, Element, WordsList};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // 配置文件路径 (~/.config/stateview/config.toml)
    let config = Config::load()?;

    // 挂载组件
    let words_root = Rc::new(RefCell::new(Element::with_id("root")));
    let mut words =
        WordsList::with_state(config.initial_state()).with_options(config.render_options());
    words.mount(&words_root);
    words.force_update()?;

    let counter_root = Rc::new(RefCell::new(Element::with_id("counter")));
    let mut counter = Counter::new();
    counter.mount(&counter_root);
    counter.force_update()?;

    // 命令行参数逐个追加为单词，计数器同步累加
    for word in std::env::args().skip(1) {
        words.add_word(word)?;
        counter.increase()?;
    }

    let mut preview = Preview::new();
    preview.add(&words_root);
    preview.add(&counter_root);

    let mut stdout = io::stdout();
    if !stdout.is_tty() {
        for panel in preview.panels() {
            writeln!(stdout, "{}", panel.root.borrow().inner_html())?;
        }
        return Ok(());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(preview.height()),
        },
    )?;
    terminal.draw(|f| render(f, &preview))?;
    println!();

    Ok(())
}
