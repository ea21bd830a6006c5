#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Text,
    Variable,
    Block,
    Comment,
}


/// A piece of template source as cut by the [Reader].
///
/// For tags `raw` is the text between the delimiters, untrimmed;
/// for text it is the text itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub raw: &'a str,
    pub line: usize,
}

impl<'a> Token<'a> {
    fn text(raw: &'a str, line: usize) -> Self {
        Token { kind: TokenKind::Text, raw, line }
    }

    fn tag(kind: TokenKind, raw: &'a str, line: usize) -> Self {
        Token { kind, raw, line }
    }

    pub fn contents(&self) -> &'a str {
        match self.kind {
            TokenKind::Text => self.raw,
            _ => self.raw.trim()
        }
    }

    /// The tag name of a block token, empty for a blank tag.
    pub fn command(&self) -> &'a str {
        self.contents().split_whitespace().next().unwrap_or_default()
    }

    /// Whitespace separated words of the contents, quoted strings kept whole.
    pub fn split_contents(&self) -> Vec<&'a str> {
        self.contents().split_contents()
    }

    /// Contents following the tag name, trimmed, not split.
    pub fn arguments(&self) -> &'a str {
        let contents = self.contents();
        match contents.find(char::is_whitespace) {
            Some(p) => contents[p..].trim(),
            None => ""
        }
    }
}


/// Splits template source into text, `{{ }}`, `{% %}` and `{# #}` tokens.
///
/// A tag ends at the first matching close delimiter and never spans
/// a line; an open delimiter without its close on the same line is text.
#[derive(Clone)]
pub(crate) struct Reader<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Reader {
            input,
            pos: 0,
            line: 1,
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<Token<'a>> {
        if self.pos == self.input.len() {
            None
        } else {
            let tail = &self.input[self.pos..];
            let token = match tail.span_tag() {
                Some((kind, raw, after_tag)) => {
                    let token = Token::tag(kind, raw, self.line);
                    self.advance(after_tag);
                    token
                },
                None => self.read_text(tail)
            };
            Some(token)
        }
    }

    fn read_text(&mut self, tail: &'a str) -> Token<'a> {
        let after_text = tail.span_text();
        let token = Token::text(&tail[..after_text], self.line);
        self.advance(after_text);
        token
    }

    fn advance(&mut self, len: usize) {
        self.line += self.input[self.pos..self.pos + len].matches('\n').count();
        self.pos += len;
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_front()
    }
}


trait ReaderStringOps {
    fn span_tag(&self) -> Option<(TokenKind, &str, usize)>;
    fn span_text(&self) -> usize;
    fn split_contents(&self) -> Vec<&str>;
}

impl ReaderStringOps for str {
    // return the kind and inner text of the tag starting the string,
    // and the position after its close delimiter
    fn span_tag(&self) -> Option<(TokenKind, &str, usize)> {
        let (kind, close_delimiter) = match self.get(..2)? {
            "{%" => (TokenKind::Block, "%}"),
            "{{" => (TokenKind::Variable, "}}"),
            "{#" => (TokenKind::Comment, "#}"),
            _ => return None
        };
        let inner = &self[2..];
        let end = inner.find(close_delimiter)?;
        if inner[..end].contains('\n') {
            None
        } else {
            Some((kind, &inner[..end], end + 4))
        }
    }

    // return the position of the next tag, or the end of the string
    fn span_text(&self) -> usize {
        let mut from = self.chars().next().map_or(0, char::len_utf8);
        while let Some(p) = self.get(from..).and_then(|rest| rest.find('{')) {
            let at = from + p;
            if self[at..].span_tag().is_some() {
                return at;
            }
            from = at + 1;
        }
        self.len()
    }

    fn split_contents(&self) -> Vec<&str> {
        let mut words = Vec::new();
        let mut start: Option<usize> = None;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        for (i, c) in self.char_indices() {
            match (start, quote) {
                (None, _) if c.is_whitespace() => {},
                (None, _) => {
                    start = Some(i);
                    if c == '"' || c == '\'' {
                        quote = Some(c);
                    }
                },
                (Some(_), Some(_)) if escaped => escaped = false,
                (Some(_), Some(_)) if c == '\\' => escaped = true,
                (Some(_), Some(q)) if c == q => quote = None,
                (Some(_), Some(_)) => {},
                (Some(s), None) if c.is_whitespace() => {
                    words.push(&self[s..i]);
                    start = None;
                },
                (Some(_), None) if c == '"' || c == '\'' => quote = Some(c),
                (Some(_), None) => {}
            }
        }
        if let Some(s) = start {
            words.push(&self[s..]);
        }
        words
    }
}
