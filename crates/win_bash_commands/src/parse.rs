use crate::{Error, Field, ParseResult, Schema};

const LONG: &str = "--";
const SHORT: &str = "-";

/// Classify `tokens` against `schema`.
///
/// This never fails. Option tokens that match nothing are dropped and a
/// keyword option at the end of the input is recorded with no value.
/// See [`Schema::parse_strict`] for a mode that rejects both.
pub fn parse<S>(schema: &Schema, tokens: &[S]) -> ParseResult
where
    S: AsRef<str>,
{
    schema.parse(tokens)
}

impl Schema {
    pub fn parse<S>(&self, tokens: &[S]) -> ParseResult
    where
        S: AsRef<str>,
    {
        let mut parser = Parser::new(self, tokens);
        parser.run(&mut |err| log::debug!("ignoring: {}", err));
        parser.result
    }

    /// Like [`Schema::parse`], but an unmatched option or a keyword option
    /// without a value is an error.
    pub fn parse_strict<S>(&self, tokens: &[S]) -> Result<ParseResult, Error>
    where
        S: AsRef<str>,
    {
        let mut first = None;
        let mut parser = Parser::new(self, tokens);
        parser.run(&mut |err| {
            first.get_or_insert(err);
        });

        match first {
            Some(err) => Err(err),
            None => Ok(parser.result),
        }
    }
}

struct Cursor<'a, S> {
    tokens: &'a [S],
    pos: usize,
}

impl<'a, S> Cursor<'a, S>
where
    S: AsRef<str>,
{
    const fn new(tokens: &'a [S]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_ref())
    }
}

struct Parser<'a, S> {
    schema: &'a Schema,
    cursor: Cursor<'a, S>,
    result: ParseResult,
}

impl<'a, S> Parser<'a, S>
where
    S: AsRef<str>,
{
    fn new(schema: &'a Schema, tokens: &'a [S]) -> Self {
        Self {
            schema,
            cursor: Cursor::new(tokens),
            result: ParseResult::default(),
        }
    }

    fn run(&mut self, soft: &mut dyn FnMut(Error)) {
        while let Some(token) = self.cursor.next() {
            let (field, key) = match () {
                _ if token.starts_with(LONG) => (Field::Title, &token[LONG.len()..]),
                _ if token.starts_with(SHORT) => (Field::Short, &token[SHORT.len()..]),
                _ => {
                    log::trace!("positional: {}", token);
                    self.result.args.push(token.to_string());
                    continue;
                }
            };

            if !self.resolve(field, key, soft) {
                soft(Error::UnknownOption(token.to_string()))
            }
        }
    }

    // the flag and kwarg lookups are independent: one key can hit both
    fn resolve(&mut self, field: Field, key: &str, soft: &mut dyn FnMut(Error)) -> bool {
        let schema = self.schema;

        let flag = schema.find_flag(field, key);
        if let Some(title) = flag {
            log::trace!("flag: {}", title);
            self.result.flags.push(title.to_string());
        }

        let kwarg = schema.find_kwarg(field, key);
        if let Some(title) = kwarg {
            let value = self.cursor.next().map(ToString::to_string);
            log::trace!("kwarg: {} = {:?}", title, value);
            if value.is_none() {
                soft(Error::MissingValue(title.to_string()))
            }
            self.result.kwargs.insert(title.to_string(), value);
        }

        flag.is_some() || kwarg.is_some()
    }
}
