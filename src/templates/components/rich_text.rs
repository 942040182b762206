use maud::{html, Markup};

/// Renders model narrative text.
///
/// Every non-blank line becomes a paragraph, lines starting with `- ` or
/// `* ` become list items, and `**bold**` spans become `<strong>`. All text
/// is escaped; an unpaired `**` is printed as is.
pub fn rich_text(text: &str) -> Markup {
    let mut blocks: Vec<Block> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let item = line.strip_prefix("- ").or_else(|| line.strip_prefix("* "));
        match item {
            Some(item) => match blocks.last_mut() {
                Some(Block::List(items)) => items.push(item),
                _ => blocks.push(Block::List(vec![item])),
            },
            None => blocks.push(Block::Paragraph(line)),
        }
    }

    html! {
        div class="rich-text" {
            @for block in &blocks {
                @match block {
                    Block::Paragraph(line) => p { (inline(line)) },
                    Block::List(items) => ul {
                        @for item in items {
                            li { (inline(item)) }
                        }
                    },
                }
            }
        }
    }
}

enum Block<'a> {
    Paragraph(&'a str),
    List(Vec<&'a str>),
}

fn inline(line: &str) -> Markup {
    let parts: Vec<&str> = line.split("**").collect();
    let last = parts.len() - 1;

    html! {
        @for (i, part) in parts.iter().enumerate() {
            @if i % 2 == 1 && i < last {
                strong { (part) }
            } @else if i % 2 == 1 {
                "**" (part)
            } @else {
                (part)
            }
        }
    }
}
