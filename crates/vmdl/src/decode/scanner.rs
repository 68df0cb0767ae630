#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 1-based physical line number.
    pub number: usize,
    /// Leading whitespace characters; a tab counts as one.
    pub indent: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment(&'a str),
    Section { key: &'a str },
    Assign { key: &'a str, value: &'a str },
    /// Neither a trailing `:` nor an `=`.
    Unrecognized(&'a str),
}

impl LineKind<'_> {
    /// Lines that take part in nesting.
    pub fn is_content(&self) -> bool {
        !matches!(self, LineKind::Blank | LineKind::Comment(_))
    }
}

#[inline]
fn leading_whitespace(s: &str) -> usize {
    s.chars().take_while(|c| c.is_whitespace()).count()
}

pub fn scan<'a>(input: &'a str) -> Vec<ParsedLine<'a>> {
    iter(input).collect()
}

pub struct LineIter<'a> {
    rest: Option<&'a str>,
    number: usize,
}

pub fn iter<'a>(input: &'a str) -> LineIter<'a> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    LineIter {
        rest: Some(input),
        number: 0,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ParsedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        self.number += 1;
        let raw = match rest.split_once('\n') {
            Some((line, remaining)) => {
                self.rest = Some(remaining);
                line
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(parse_line(raw, self.number))
    }
}

pub fn parse_line(line: &str, number: usize) -> ParsedLine<'_> {
    let body = line.trim();
    let kind = if body.is_empty() {
        LineKind::Blank
    } else if body.starts_with('#') {
        LineKind::Comment(body)
    } else if let Some(key) = body.strip_suffix(':') {
        LineKind::Section { key: key.trim() }
    } else if let Some((key, value)) = body.split_once('=') {
        LineKind::Assign {
            key: key.trim(),
            value: value.trim(),
        }
    } else {
        LineKind::Unrecognized(body)
    };
    let indent = match kind {
        LineKind::Blank => 0,
        _ => leading_whitespace(line),
    };
    ParsedLine {
        number,
        indent,
        kind,
    }
}
