//! 解答文本的轻量标记解析 - 业务能力层
//!
//! 支持三种标记：
//! - 代码块：<code>```lang\n...```</code>
//! - 加粗：`**text**`（不跨行）
//! - 换行
//!
//! 先解析成中间结构再输出，代码块里的 `**` 不会被当成加粗。
//! 解析是全函数：标记不配对时原样保留为文本，不会失败。
//! 输出 HTML 时所有文本都经过转义

use regex::Regex;
use std::fmt::Write as _;
use std::sync::OnceLock;

/// 块级元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Code { lang: Option<String>, code: String },
}

/// 行内元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    LineBreak,
}

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(\w*)\n((?s:.*?))```").expect("fence pattern is valid"))
}

fn strong_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("strong pattern is valid"))
}

/// 解析标记文本
pub fn parse(src: &str) -> Document {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for cap in fence_regex().captures_iter(src) {
        let (Some(whole), Some(body)) = (cap.get(0), cap.get(2)) else {
            continue;
        };

        push_paragraph(&mut blocks, &src[cursor..whole.start()]);

        let lang = cap
            .get(1)
            .map(|m| m.as_str())
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        blocks.push(Block::Code {
            lang,
            code: body.as_str().to_string(),
        });

        cursor = whole.end();
    }

    push_paragraph(&mut blocks, &src[cursor..]);

    Document { blocks }
}

fn push_paragraph(blocks: &mut Vec<Block>, text: &str) {
    if text.is_empty() {
        return;
    }
    blocks.push(Block::Paragraph(parse_inline(text)));
}

fn parse_inline(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            inlines.push(Inline::LineBreak);
        }

        let mut cursor = 0;
        for cap in strong_regex().captures_iter(line) {
            let (Some(whole), Some(inner)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                inlines.push(Inline::Text(line[cursor..whole.start()].to_string()));
            }
            inlines.push(Inline::Strong(inner.as_str().to_string()));
            cursor = whole.end();
        }
        if cursor < line.len() {
            inlines.push(Inline::Text(line[cursor..].to_string()));
        }
    }

    inlines
}

impl Document {
    /// 输出安全的 HTML 片段
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for block in &self.blocks {
            match block {
                Block::Paragraph(inlines) => {
                    html.push_str("<p>");
                    for inline in inlines {
                        match inline {
                            Inline::Text(text) => html.push_str(&escape(text)),
                            Inline::Strong(text) => {
                                let _ = write!(html, "<strong>{}</strong>", escape(text));
                            }
                            Inline::LineBreak => html.push_str("<br/>"),
                        }
                    }
                    html.push_str("</p>");
                }
                Block::Code { lang, code } => {
                    match lang {
                        Some(lang) => {
                            let _ = write!(html, "<pre><code class=\"language-{}\">", escape(lang));
                        }
                        None => html.push_str("<pre><code>"),
                    }
                    html.push_str(&escape(code));
                    html.push_str("</code></pre>");
                }
            }
        }

        html
    }

    /// 去掉全部标记后的纯文本
    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();

        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 && !text.ends_with('\n') {
                text.push('\n');
            }
            match block {
                Block::Paragraph(inlines) => {
                    for inline in inlines {
                        match inline {
                            Inline::Text(t) | Inline::Strong(t) => text.push_str(t),
                            Inline::LineBreak => text.push('\n'),
                        }
                    }
                }
                Block::Code { code, .. } => text.push_str(code),
            }
        }

        text
    }
}

/// 转义文本，使其不能作为标签或属性被解释
fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// 解析并输出 HTML
pub fn render_html(src: &str) -> String {
    parse(src).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_line_breaks() {
        let doc = parse("**Deadlock** needs\nfour conditions");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![
                Inline::Strong("Deadlock".to_string()),
                Inline::Text(" needs".to_string()),
                Inline::LineBreak,
                Inline::Text("four conditions".to_string()),
            ])]
        );
    }

    #[test]
    fn code_fence_keeps_emphasis_markers_literal() {
        let doc = parse("Example:\n```c\nint **pp = 0;\n```\ndone");

        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(
            doc.blocks[1],
            Block::Code {
                lang: Some("c".to_string()),
                code: "int **pp = 0;\n".to_string(),
            }
        );
        assert!(!doc.to_html().contains("<strong>"));
    }

    #[test]
    fn unbalanced_markers_stay_as_text() {
        let doc = parse("a ** b\n```python\nprint(1)");
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.to_plain_text(), "a ** b\n```python\nprint(1)");
    }

    #[test]
    fn bold_does_not_span_lines() {
        let doc = parse("**open\nclose**");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![
                Inline::Text("**open".to_string()),
                Inline::LineBreak,
                Inline::Text("close**".to_string()),
            ])]
        );
    }

    #[test]
    fn script_tags_are_escaped() {
        let html = render_html("<script>alert(1)</script> **<img src=x onerror=y>**");
        assert!(!html.contains("<script"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn code_block_html() {
        let html = render_html("```\na<b\n```");
        assert_eq!(html, "<pre><code>a&lt;b&#10;</code></pre>");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(parse("").blocks.is_empty());
        assert_eq!(render_html(""), "");
    }
}
