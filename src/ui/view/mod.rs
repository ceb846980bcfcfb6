//! 视图层模块
//!
//! 标题画成粗体行，列表项画成圆点行，其余文本按块元素分行。

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use scraper::{ElementRef, Node};

use super::state::Preview;
use crate::dom::Element;
use components::render_panel_framework;

/// 渲染全部面板
pub fn render(frame: &mut Frame, preview: &Preview) {
    let constraints: Vec<Constraint> = preview
        .panel_heights()
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    for (panel, area) in preview.panels().iter().zip(chunks.iter()) {
        let inner = render_panel_framework(frame, *area, &panel.title);
        let lines = element_lines(&panel.root.borrow());
        let content = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }
}

/// 把容器内容转换为终端行
pub fn element_lines(element: &Element) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    collect_lines(element.root(), &mut lines, &mut pending);
    flush(&mut pending, &mut lines);
    lines
}

fn collect_lines(parent: ElementRef<'_>, lines: &mut Vec<Line<'static>>, pending: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => pending.push_str(text),
            Node::Element(_) => {
                let Some(element) = ElementRef::wrap(child) else {
                    continue;
                };
                match element.value().name() {
                    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                        flush(pending, lines);
                        lines.push(Line::from(Span::styled(
                            element.text().collect::<String>(),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )));
                    }
                    "li" => {
                        flush(pending, lines);
                        lines.push(Line::from(vec![
                            Span::styled("• ", Style::default().fg(Color::Green)),
                            Span::raw(element.text().collect::<String>()),
                        ]));
                    }
                    "div" | "ul" | "ol" | "p" => {
                        flush(pending, lines);
                        collect_lines(element, lines, pending);
                        flush(pending, lines);
                    }
                    _ => collect_lines(element, lines, pending),
                }
            }
            _ => {}
        }
    }
}

fn flush(pending: &mut String, lines: &mut Vec<Line<'static>>) {
    let text = pending.trim();
    if !text.is_empty() {
        lines.push(Line::raw(text.to_string()));
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::dom::RenderTarget;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_words_list_lines() {
        let mut root = Element::new();
        root.replace_content("<div><h1>Title 1</h1><ul><li>one</li><li>two</li></ul></div>");

        let lines: Vec<String> = element_lines(&root).iter().map(line_text).collect();

        assert_eq!(lines, vec!["Title 1", "• one", "• two"]);
    }

    #[test]
    fn test_plain_text_is_one_line() {
        let mut root = Element::new();
        root.replace_content("Count: 1");

        let lines: Vec<String> = element_lines(&root).iter().map(line_text).collect();

        assert_eq!(lines, vec!["Count: 1"]);
    }

    #[test]
    fn test_empty_container_has_no_lines() {
        assert!(element_lines(&Element::new()).is_empty());
    }

    #[test]
    fn test_render_draws_panels() {
        let root = Rc::new(RefCell::new(Element::with_id("counter")));
        root.borrow_mut().replace_content("Count: 2");
        let mut preview = Preview::new();
        preview.add(&root);

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal.draw(|frame| render(frame, &preview)).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16).map(|x| buffer[(x, 1u16)].symbol().to_string()).collect();
        assert!(row.contains("Count: 2"));
        let top: String = (0..20u16).map(|x| buffer[(x, 0u16)].symbol().to_string()).collect();
        assert!(top.contains("#counter"));
    }
}
