use {
  super::*,
  pulldown_cmark::{Event, Options, Parser, Tag},
};

/// Parses markdown into the generic mdast-shaped tree the extractor walks.
///
/// pulldown-cmark hands back a flat event stream, and its tight lists put
/// item content directly under the item. Entry recognition depends on the
/// remark shape instead, where adjacent text runs are merged and every list
/// item wraps its inline content in a paragraph, so the fold restores both.
pub(crate) fn parse(markdown: &str) -> GenericNode {
  let mut options = Options::empty();
  options.insert(Options::ENABLE_STRIKETHROUGH);
  options.insert(Options::ENABLE_TASKLISTS);

  let mut builder = TreeBuilder::new();

  for (event, range) in Parser::new_ext(markdown, options).into_offset_iter() {
    builder.event(
      event,
      Span {
        start: range.start,
        end: range.end,
      },
    );
  }

  builder.finish()
}

struct Frame {
  node: GenericNode,
  children: Vec<GenericNode>,
  /// Structure we do not model; children splice into the parent.
  transparent: bool,
}

impl Frame {
  fn new(node: GenericNode) -> Self {
    Self {
      node,
      children: Vec::new(),
      transparent: false,
    }
  }

  fn transparent() -> Self {
    Self {
      transparent: true,
      ..Self::new(GenericNode::new(NodeKind::Root))
    }
  }
}

struct TreeBuilder {
  root: Frame,
  stack: Vec<Frame>,
}

impl TreeBuilder {
  fn new() -> Self {
    Self {
      root: Frame::new(GenericNode::new(NodeKind::Root)),
      stack: Vec::new(),
    }
  }

  fn event(&mut self, event: Event, span: Span) {
    match event {
      Event::Start(tag) => self.start(tag, span),
      Event::End(_) => self.finish_frame(),
      Event::Text(text) => self.text(&text, span),
      Event::Code(code) => self.leaf(GenericNode {
        value: Some(code.into_string()),
        position: Some(span),
        ..GenericNode::new(NodeKind::InlineCode)
      }),
      Event::Html(html) | Event::InlineHtml(html) => self.html(&html, span),
      Event::SoftBreak => self.text("\n", span),
      Event::HardBreak => self.leaf(GenericNode {
        position: Some(span),
        ..GenericNode::new(NodeKind::Break)
      }),
      Event::Rule => self.leaf(GenericNode {
        position: Some(span),
        ..GenericNode::new(NodeKind::ThematicBreak)
      }),
      Event::TaskListMarker(checked) => {
        let frame = self.current();

        if frame.node.kind == NodeKind::ListItem {
          frame.node.checked = Some(checked);
        }
      }
      _ => {}
    }
  }

  fn start(&mut self, tag: Tag, span: Span) {
    let mut node = match tag {
      Tag::Paragraph => GenericNode::new(NodeKind::Paragraph),
      Tag::Heading { level, .. } => GenericNode {
        depth: Some(level as u8),
        ..GenericNode::new(NodeKind::Heading)
      },
      Tag::BlockQuote(_) => GenericNode::new(NodeKind::Blockquote),
      Tag::CodeBlock(_) => GenericNode {
        value: Some(String::new()),
        ..GenericNode::new(NodeKind::Code)
      },
      Tag::HtmlBlock => GenericNode {
        value: Some(String::new()),
        ..GenericNode::new(NodeKind::Html)
      },
      Tag::List(start) => GenericNode {
        ordered: Some(start.is_some()),
        ..GenericNode::new(NodeKind::List)
      },
      Tag::Item => GenericNode::new(NodeKind::ListItem),
      Tag::Emphasis => GenericNode::new(NodeKind::Emphasis),
      Tag::Strong => GenericNode::new(NodeKind::Strong),
      Tag::Strikethrough => GenericNode::new(NodeKind::Delete),
      Tag::Link { dest_url, .. } => GenericNode {
        url: Some(dest_url.into_string()),
        ..GenericNode::new(NodeKind::Link)
      },
      Tag::Image { dest_url, id, .. } => {
        if id.is_empty() {
          GenericNode {
            url: Some(dest_url.into_string()),
            ..GenericNode::new(NodeKind::Image)
          }
        } else {
          GenericNode {
            url: Some(dest_url.into_string()),
            identifier: Some(id.into_string()),
            ..GenericNode::new(NodeKind::ImageReference)
          }
        }
      }
      _ => {
        self.stack.push(Frame::transparent());
        return;
      }
    };

    node.position = Some(span);

    self.stack.push(Frame::new(node));
  }

  fn finish_frame(&mut self) {
    let Some(frame) = self.stack.pop() else {
      return;
    };

    if frame.transparent {
      self.current().children.extend(frame.children);
      return;
    }

    let mut node = frame.node;
    let children = frame.children;

    match node.kind {
      // mdast images carry their alt text as a string, not as children.
      NodeKind::Image | NodeKind::ImageReference => {
        node.alt = Some(children.iter().map(GenericNode::plain_text).collect());
      }
      NodeKind::Code | NodeKind::Html => {}
      NodeKind::ListItem => {
        node.children = Some(wrap_tight(children));
      }
      _ => {
        node.children = Some(children);
      }
    }

    self.current().children.push(node);
  }

  fn finish(mut self) -> GenericNode {
    while !self.stack.is_empty() {
      self.finish_frame();
    }

    let mut root = self.root.node;
    root.children = Some(self.root.children);
    root
  }

  fn current(&mut self) -> &mut Frame {
    self.stack.last_mut().unwrap_or(&mut self.root)
  }

  fn text(&mut self, text: &str, span: Span) {
    let frame = self.current();

    // Code blocks keep their content in `value`.
    if frame.node.kind == NodeKind::Code {
      if let Some(value) = &mut frame.node.value {
        value.push_str(text);
      }
      return;
    }

    // Merge adjacent runs the way remark does.
    if let Some(last) = frame.children.last_mut()
      && last.kind == NodeKind::Text
    {
      if let Some(value) = &mut last.value {
        value.push_str(text);
      }

      if let Some(position) = &mut last.position {
        position.end = span.end;
      }

      return;
    }

    frame.children.push(GenericNode {
      position: Some(span),
      ..GenericNode::text(text)
    });
  }

  fn html(&mut self, html: &str, span: Span) {
    let frame = self.current();

    if frame.node.kind == NodeKind::Html {
      if let Some(value) = &mut frame.node.value {
        value.push_str(html);
      }

      if let Some(position) = &mut frame.node.position {
        position.end = span.end;
      }

      return;
    }

    // Inline html outside an html block becomes its own leaf.
    frame.children.push(GenericNode {
      value: Some(html.to_string()),
      position: Some(span),
      ..GenericNode::new(NodeKind::Html)
    });
  }

  fn leaf(&mut self, node: GenericNode) {
    self.current().children.push(node);
  }
}

/// Wraps runs of inline nodes from a tight list item in a paragraph node,
/// matching the shape remark produces for tight and loose lists alike.
fn wrap_tight(children: Vec<GenericNode>) -> Vec<GenericNode> {
  let mut wrapped = Vec::new();
  let mut run: Vec<GenericNode> = Vec::new();

  for child in children {
    if child.kind.is_inline() {
      run.push(child);
    } else {
      flush_run(&mut wrapped, &mut run);
      wrapped.push(child);
    }
  }

  flush_run(&mut wrapped, &mut run);

  wrapped
}

fn flush_run(wrapped: &mut Vec<GenericNode>, run: &mut Vec<GenericNode>) {
  if run.is_empty() {
    return;
  }

  let run = std::mem::take(run);

  let position = run.first().and_then(|node| node.position).map(|first| Span {
    start: first.start,
    end: run
      .last()
      .and_then(|node| node.position)
      .map_or(first.end, |last| last.end),
  });

  wrapped.push(GenericNode {
    position,
    children: Some(run),
    ..GenericNode::new(NodeKind::Paragraph)
  });
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn top_level(markdown: &str) -> Vec<GenericNode> {
    parse(markdown).children.expect("root has children")
  }

  #[test]
  fn tight_list_item_wraps_inlines_in_a_paragraph() {
    let nodes = top_level("* [Atom](https://atom.io) - fast text editor.\n");

    let list = &nodes[0];
    assert_eq!(list.kind, NodeKind::List);
    assert_eq!(list.ordered, Some(false));

    let item = &list.children.as_ref().unwrap()[0];
    assert_eq!(item.kind, NodeKind::ListItem);

    let paragraph = &item.children.as_ref().unwrap()[0];
    assert_eq!(paragraph.kind, NodeKind::Paragraph);

    let children = paragraph.children.as_ref().unwrap();
    assert_eq!(children[0].kind, NodeKind::Link);
    assert_eq!(children[0].url.as_deref(), Some("https://atom.io"));
    assert_eq!(children[1].kind, NodeKind::Text);
    assert_eq!(children[1].value.as_deref(), Some(" - fast text editor."));
  }

  #[test]
  fn adjacent_text_runs_merge_across_soft_breaks() {
    let nodes = top_level("first line\nsecond line\n");

    let paragraph = &nodes[0];
    let children = paragraph.children.as_ref().unwrap();

    assert_eq!(children.len(), 1);
    assert_eq!(
      children[0].value.as_deref(),
      Some("first line\nsecond line")
    );
  }

  #[test]
  fn reference_image_resolves_url_and_keeps_identifier() {
    let nodes = top_level(
      "![Open-Source Software][OSS Icon]\n\n[OSS Icon]: /media/oss.png\n",
    );

    let paragraph = &nodes[0];
    let image = &paragraph.children.as_ref().unwrap()[0];

    assert_eq!(image.kind, NodeKind::ImageReference);
    assert_eq!(image.identifier.as_deref(), Some("OSS Icon"));
    assert_eq!(image.url.as_deref(), Some("/media/oss.png"));
    assert_eq!(image.alt.as_deref(), Some("Open-Source Software"));
    assert_eq!(image.children, None);
  }

  #[test]
  fn inline_image_has_no_identifier() {
    let nodes = top_level("![shot](/media/shot.png)\n");

    let image = &nodes[0].children.as_ref().unwrap()[0];

    assert_eq!(image.kind, NodeKind::Image);
    assert_eq!(image.identifier, None);
    assert_eq!(image.url.as_deref(), Some("/media/shot.png"));
  }

  #[test]
  fn html_comment_becomes_a_top_level_html_node() {
    let nodes = top_level("intro\n\n<!--start-->\n\noutro\n");

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[1].kind, NodeKind::Html);
    assert!(nodes[1].value.as_deref().unwrap().contains("<!--start-->"));
  }

  #[test]
  fn strikethrough_parses_as_delete() {
    let nodes = top_level("~~[Atom](https://atom.io)~~ - sunset.\n");

    let children = nodes[0].children.as_ref().unwrap();

    assert_eq!(children[0].kind, NodeKind::Delete);
    assert_eq!(
      children[0].children.as_ref().unwrap()[0].kind,
      NodeKind::Link
    );
    assert_eq!(children[1].value.as_deref(), Some(" - sunset."));
  }

  #[test]
  fn task_list_marker_lands_on_the_item() {
    let nodes = top_level("- [x] done\n- [ ] pending\n");

    let items = nodes[0].children.as_ref().unwrap();

    assert_eq!(items[0].checked, Some(true));
    assert_eq!(items[1].checked, Some(false));
  }

  #[test]
  fn headings_keep_their_depth() {
    let nodes = top_level("### Audio\n");

    assert_eq!(nodes[0].kind, NodeKind::Heading);
    assert_eq!(nodes[0].depth, Some(3));
    assert_eq!(
      nodes[0].children.as_ref().unwrap()[0].value.as_deref(),
      Some("Audio")
    );
  }

  #[test]
  fn nodes_carry_source_positions() {
    let nodes = top_level("plain paragraph\n");

    assert_eq!(nodes[0].position, Some(Span { start: 0, end: 16 }));
  }
}
