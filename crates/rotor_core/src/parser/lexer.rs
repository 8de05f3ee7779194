//! ES5/ES6 JavaScript lexer.
//!
//! See [`Lexer`] for the main entry point.
//!
//! The lexer is driven entirely by the parser and keeps no syntactic state
//! between tokens: a `/` always lexes as a punctuator, and `}` always lexes
//! as a plain brace.  When the grammar calls for a regular-expression literal
//! or the continuation of a template literal, the parser asks for it
//! explicitly via [`Lexer::scan_regexp`] and [`Lexer::scan_trailing_template`].
//! This keeps the cursor trivially resettable — [`Lexer::save`] /
//! [`Lexer::restore`] copy three fields — which the parser relies on for
//! speculative lookahead.
//!
//! Identifier-shaped lexemes (including keywords) are interned eagerly; their
//! tokens carry [`IdentId`] handles so the parser can demote a keyword to an
//! identifier wherever the grammar allows it without touching string data.

use crate::arena::{IdentId, Interner, WellKnown};
use crate::error::{RotorError, RotorResult};
use crate::parser::token::{Position, Span, Token, TokenKind, TokenValue};

// ─────────────────────────────────────────────────────────────────────────────
// Character-classification helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `true` for *LineTerminator* code points.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for *WhiteSpace* **or** *LineTerminator* characters.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'                      // CHARACTER TABULATION
        | '\x0B'                  // LINE TABULATION
        | '\x0C'                  // FORM FEED
        | ' '                     // SPACE
        | '\u{00A0}'              // NO-BREAK SPACE
        | '\u{FEFF}'              // ZERO WIDTH NO-BREAK SPACE (BOM)
        | '\u{1680}'              // OGHAM SPACE MARK
        | '\u{2000}'
            ..='\u{200A}' // EN QUAD … HAIR SPACE
        | '\u{202F}'              // NARROW NO-BREAK SPACE
        | '\u{205F}'              // MEDIUM MATHEMATICAL SPACE
        | '\u{3000}'              // IDEOGRAPHIC SPACE
        | '\n'
        | '\r'
        | '\u{2028}'
        | '\u{2029}'
    )
}

/// Returns `true` for characters that may *start* a JS identifier.
fn is_id_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Returns `true` for characters that may *continue* a JS identifier.
fn is_id_continue(c: char) -> bool {
    c == '$' || c == '_' || c == '\u{200C}' || c == '\u{200D}' || c.is_alphanumeric()
}

/// Map an identifier string to a reserved-word/contextual-keyword
/// [`TokenKind`], or return `None` for plain identifiers.
fn keyword_kind(s: &str) -> Option<TokenKind> {
    match s {
        "await" => Some(TokenKind::Await),
        "break" => Some(TokenKind::Break),
        "case" => Some(TokenKind::Case),
        "catch" => Some(TokenKind::Catch),
        "class" => Some(TokenKind::Class),
        "const" => Some(TokenKind::Const),
        "continue" => Some(TokenKind::Continue),
        "debugger" => Some(TokenKind::Debugger),
        "default" => Some(TokenKind::Default),
        "delete" => Some(TokenKind::Delete),
        "do" => Some(TokenKind::Do),
        "else" => Some(TokenKind::Else),
        "enum" => Some(TokenKind::Enum),
        "export" => Some(TokenKind::Export),
        "extends" => Some(TokenKind::Extends),
        "false" => Some(TokenKind::False),
        "finally" => Some(TokenKind::Finally),
        "for" => Some(TokenKind::For),
        "function" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "import" => Some(TokenKind::Import),
        "in" => Some(TokenKind::In),
        "instanceof" => Some(TokenKind::Instanceof),
        "let" => Some(TokenKind::Let),
        "new" => Some(TokenKind::New),
        "null" => Some(TokenKind::Null),
        "of" => Some(TokenKind::Of),
        "return" => Some(TokenKind::Return),
        "static" => Some(TokenKind::Static),
        "super" => Some(TokenKind::Super),
        "switch" => Some(TokenKind::Switch),
        "this" => Some(TokenKind::This),
        "throw" => Some(TokenKind::Throw),
        "true" => Some(TokenKind::True),
        "try" => Some(TokenKind::Try),
        "typeof" => Some(TokenKind::Typeof),
        "var" => Some(TokenKind::Var),
        "void" => Some(TokenKind::Void),
        "while" => Some(TokenKind::While),
        "with" => Some(TokenKind::With),
        "yield" => Some(TokenKind::Yield),
        "as" => Some(TokenKind::As),
        "from" => Some(TokenKind::From),
        "get" => Some(TokenKind::Get),
        "set" => Some(TokenKind::Set),
        "target" => Some(TokenKind::Target),
        "implements" => Some(TokenKind::Implements),
        "interface" => Some(TokenKind::Interface),
        "package" => Some(TokenKind::Package),
        "private" => Some(TokenKind::Private),
        "protected" => Some(TokenKind::Protected),
        "public" => Some(TokenKind::Public),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor state
// ─────────────────────────────────────────────────────────────────────────────

/// A saved lexer cursor.  Restoring is a plain field copy; all other lexer
/// state is derived from the source text at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerState {
    /// Byte position within the source.
    pub pos: usize,
    /// 1-based line number at `pos`.
    pub line: u32,
    /// 1-based column number at `pos`.
    pub column: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Escape decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decoded contribution of one escape sequence.
enum Escape {
    /// A single decoded scalar value.
    Char(char),
    /// A UTF-16 code unit from a `\uXXXX` escape (may be half a surrogate
    /// pair; the caller pairs consecutive units).
    Unit(u16),
    /// A line continuation — contributes nothing to the cooked value.
    Nothing,
    /// The escape is malformed (`\u{}`, bad hex digits, …).
    Invalid,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

/// ES5/ES6 JavaScript lexer over a UTF-8 source string.
///
/// Produces one [`Token`] per [`Lexer::next`] call; comments and whitespace
/// are consumed internally and surface only as the token's
/// `had_line_terminator_before` flag.  Call [`Lexer::next`] until a token
/// with [`TokenKind::Eof`] is returned.
pub struct Lexer<'s, 'i, 'a> {
    /// The complete source string.
    source: &'s str,
    /// Current byte position within `source`.
    pos: usize,
    /// Current 1-based line number.
    line: u32,
    /// Current 1-based column number.
    column: u32,
    /// Identifier interner; every identifier-shaped lexeme is interned.
    interner: &'i mut Interner<'a>,
}

impl<'s, 'i, 'a> Lexer<'s, 'i, 'a> {
    /// Create a new lexer for the given UTF-8 source string.
    pub fn new(source: &'s str, interner: &'i mut Interner<'a>) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            interner,
        }
    }

    /// Returns `true` when all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The complete source string this lexer scans.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Current byte offset of the cursor.
    pub fn current_offset(&self) -> usize {
        self.pos
    }

    /// Snapshot the cursor for a later [`Lexer::restore`].
    pub fn save(&self) -> LexerState {
        LexerState {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind (or fast-forward) the cursor to a previously saved state.
    pub fn restore(&mut self, state: LexerState) {
        self.pos = state.pos;
        self.line = state.line;
        self.column = state.column;
    }

    /// Shared access to the interner.
    pub fn interner(&self) -> &Interner<'a> {
        self.interner
    }

    /// Mutable access to the interner.
    pub fn interner_mut(&mut self) -> &mut Interner<'a> {
        self.interner
    }

    /// Copy of the pre-interned well-known name table.
    pub fn well_known(&self) -> WellKnown {
        self.interner.well_known()
    }

    // ── Low-level character helpers ─────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek2(&self) -> Option<char> {
        let mut it = self.source[self.pos..].chars();
        it.next();
        it.next()
    }

    /// Advance past the current character and update line/column tracking.
    ///
    /// `\r\n` is treated as a single line terminator; the `\n` is consumed
    /// automatically so callers never see a stray `\r`.
    fn advance(&mut self) -> char {
        let ch = self.source[self.pos..]
            .chars()
            .next()
            .expect("advance called past end of input");
        self.pos += ch.len_utf8();
        match ch {
            '\r' => {
                // CRLF: consume the \n silently.
                if self.source[self.pos..].starts_with('\n') {
                    self.pos += 1;
                }
                self.line += 1;
                self.column = 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
            }
        }
        ch
    }

    fn current_pos(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn syntax_error(&self, msg: impl Into<String>, at: Position) -> RotorError {
        RotorError::SyntaxError(format!(
            "{} at line {}, column {}",
            msg.into(),
            at.line,
            at.column
        ))
    }

    // ── Whitespace and comments ─────────────────────────────────────────────

    /// Consume whitespace and comments; returns `true` if any line
    /// terminators were crossed (including inside block comments).
    fn skip_whitespace_and_comments(&mut self) -> RotorResult<bool> {
        let mut had_lt = false;
        loop {
            match self.peek() {
                Some(c) if is_js_whitespace(c) => {
                    if is_line_terminator(c) {
                        had_lt = true;
                    }
                    self.advance();
                }
                Some('/') if self.peek2() == Some('/') => {
                    self.advance();
                    self.advance();
                    while let Some(c) = self.peek() {
                        if is_line_terminator(c) {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek2() == Some('*') => {
                    let open = self.current_pos();
                    self.advance();
                    self.advance();
                    loop {
                        match self.peek() {
                            None => {
                                return Err(
                                    self.syntax_error("unterminated block comment", open)
                                );
                            }
                            Some('*') if self.peek2() == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(c) => {
                                if is_line_terminator(c) {
                                    had_lt = true;
                                }
                                self.advance();
                            }
                        }
                    }
                }
                // Shebang: only valid at byte 0.
                Some('#') if self.pos == 0 && self.peek2() == Some('!') => {
                    self.advance();
                    self.advance();
                    while let Some(c) = self.peek() {
                        if is_line_terminator(c) {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => return Ok(had_lt),
            }
        }
    }

    // ── Digit-run helpers ───────────────────────────────────────────────────

    fn scan_decimal_digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_hex_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn scan_binary_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some('0' | '1')) {
            self.advance();
            count += 1;
        }
        count
    }

    fn scan_octal_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some('0'..='7')) {
            self.advance();
            count += 1;
        }
        count
    }

    // ── Escape sequences ────────────────────────────────────────────────────

    /// Decode one escape sequence starting *after* the leading `\`.
    fn read_escape_sequence(&mut self) -> RotorResult<Escape> {
        let at = self.current_pos();
        let Some(c) = self.peek() else {
            return Err(self.syntax_error("unterminated escape sequence", at));
        };
        self.advance();
        let escape = match c {
            'n' => Escape::Char('\n'),
            't' => Escape::Char('\t'),
            'r' => Escape::Char('\r'),
            'b' => Escape::Char('\u{8}'),
            'f' => Escape::Char('\u{C}'),
            'v' => Escape::Char('\u{B}'),
            'x' => {
                let mut value = 0u32;
                for _ in 0..2 {
                    match self.peek() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            value = value * 16 + d.to_digit(16).unwrap();
                            self.advance();
                        }
                        _ => return Ok(Escape::Invalid),
                    }
                }
                Escape::Char(char::from_u32(value).unwrap_or('\u{FFFD}'))
            }
            'u' => {
                if self.peek() == Some('{') {
                    self.advance();
                    let mut value = 0u32;
                    let mut count = 0usize;
                    while let Some(d) = self.peek() {
                        if !d.is_ascii_hexdigit() {
                            break;
                        }
                        value = value.saturating_mul(16) + d.to_digit(16).unwrap();
                        self.advance();
                        count += 1;
                    }
                    if count == 0 || self.peek() != Some('}') || value > 0x10FFFF {
                        return Ok(Escape::Invalid);
                    }
                    self.advance(); // }
                    match char::from_u32(value) {
                        Some(ch) => Escape::Char(ch),
                        // Lone surrogates cannot live in a Rust string.
                        None => Escape::Char('\u{FFFD}'),
                    }
                } else {
                    let mut value = 0u16;
                    for _ in 0..4 {
                        match self.peek() {
                            Some(d) if d.is_ascii_hexdigit() => {
                                value = value * 16 + d.to_digit(16).unwrap() as u16;
                                self.advance();
                            }
                            _ => return Ok(Escape::Invalid),
                        }
                    }
                    Escape::Unit(value)
                }
            }
            // Legacy octal escape (`\0` … `\377`); bare `\0` is the common case.
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap();
                let mut digits = 1;
                while digits < 3 {
                    match self.peek() {
                        Some(d @ '0'..='7') if value * 8 + d.to_digit(8).unwrap() <= 255 => {
                            value = value * 8 + d.to_digit(8).unwrap();
                            self.advance();
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                Escape::Char(char::from_u32(value).unwrap_or('\u{FFFD}'))
            }
            // Escaped line terminator — a line continuation.
            '\r' | '\n' | '\u{2028}' | '\u{2029}' => Escape::Nothing,
            // Any other character escapes to itself.
            other => Escape::Char(other),
        };
        Ok(escape)
    }

    /// Append the decoded value of one escape to `cooked`, pairing a pending
    /// high surrogate with a following `\uXXXX` low surrogate.
    fn push_escape(&mut self, cooked: &mut String, pending_high: &mut Option<u16>) -> RotorResult<bool> {
        let escape = self.read_escape_sequence()?;
        match escape {
            Escape::Invalid => return Ok(false),
            Escape::Nothing => {}
            Escape::Char(c) => {
                Self::flush_surrogate(cooked, pending_high);
                cooked.push(c);
            }
            Escape::Unit(unit) => {
                if let Some(high) = pending_high.take() {
                    if (0xDC00..=0xDFFF).contains(&unit) {
                        let combined = 0x10000
                            + (((high as u32) - 0xD800) << 10)
                            + (unit as u32 - 0xDC00);
                        cooked.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                        return Ok(true);
                    }
                    cooked.push('\u{FFFD}');
                }
                if (0xD800..=0xDBFF).contains(&unit) {
                    *pending_high = Some(unit);
                } else if (0xDC00..=0xDFFF).contains(&unit) {
                    cooked.push('\u{FFFD}');
                } else {
                    cooked.push(char::from_u32(unit as u32).unwrap_or('\u{FFFD}'));
                }
            }
        }
        Ok(true)
    }

    fn flush_surrogate(cooked: &mut String, pending_high: &mut Option<u16>) {
        if pending_high.take().is_some() {
            cooked.push('\u{FFFD}');
        }
    }

    // ── String literal ──────────────────────────────────────────────────────

    fn scan_string(&mut self, quote: char, start: Position) -> RotorResult<Token> {
        let mut cooked = String::new();
        let mut pending_high: Option<u16> = None;
        let mut escaped = false;
        loop {
            match self.peek() {
                None | Some('\n') | Some('\r') | Some('\u{2028}') | Some('\u{2029}') => {
                    return Err(self.syntax_error("unterminated string literal", start));
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    escaped = true;
                    self.advance();
                    let at = self.current_pos();
                    if !self.push_escape(&mut cooked, &mut pending_high)? {
                        return Err(self.syntax_error("invalid escape sequence", at));
                    }
                }
                Some(c) => {
                    Self::flush_surrogate(&mut cooked, &mut pending_high);
                    cooked.push(c);
                    self.advance();
                }
            }
        }
        Self::flush_surrogate(&mut cooked, &mut pending_high);
        let value = self.interner.intern(&cooked);
        let end = self.current_pos();
        Ok(Token {
            kind: TokenKind::StringLiteral,
            value: TokenValue::Str { value, escaped },
            span: Span { start, end },
            had_line_terminator_before: false, // caller patches this
        })
    }

    // ── Template literals ───────────────────────────────────────────────────

    /// Scan template characters after the opening `` ` `` or after a `}` that
    /// closes a substitution.  Returns `(payload, found_substitution)` where
    /// the payload holds cooked/raw handles.  `raw_mode` is `true` in tagged
    /// position, where a malformed escape yields a `None` cooked value
    /// instead of an error.
    fn scan_template_body(
        &mut self,
        start: Position,
        raw_mode: bool,
    ) -> RotorResult<(TokenValue, bool)> {
        let mut cooked = Some(String::new());
        let mut raw = String::new();
        let mut pending_high: Option<u16> = None;
        let found_substitution = loop {
            match self.peek() {
                None => {
                    return Err(self.syntax_error("unterminated template literal", start));
                }
                Some('`') => {
                    self.advance();
                    break false;
                }
                Some('$') if self.peek2() == Some('{') => {
                    self.advance();
                    self.advance();
                    break true;
                }
                Some('\\') => {
                    let raw_from = self.pos;
                    self.advance();
                    let at = self.current_pos();
                    let ok = match cooked.as_mut() {
                        Some(buf) => self.push_escape(buf, &mut pending_high)?,
                        None => {
                            // Cooked value already abandoned; still consume the
                            // escape so raw text stays aligned.
                            let mut scratch = String::new();
                            self.push_escape(&mut scratch, &mut pending_high)?
                        }
                    };
                    if !ok {
                        if raw_mode {
                            cooked = None;
                        } else {
                            return Err(self.syntax_error("invalid escape sequence", at));
                        }
                    }
                    // Raw text keeps the backslash form, CRLF-normalized.
                    for c in self.source[raw_from..self.pos].chars() {
                        if c == '\r' {
                            raw.push('\n');
                        } else {
                            raw.push(c);
                        }
                    }
                }
                Some('\r') => {
                    // Template values normalize <CR> and <CR><LF> to <LF>.
                    self.advance();
                    if let Some(buf) = cooked.as_mut() {
                        Self::flush_surrogate(buf, &mut pending_high);
                        buf.push('\n');
                    }
                    raw.push('\n');
                }
                Some(c) => {
                    self.advance();
                    if let Some(buf) = cooked.as_mut() {
                        Self::flush_surrogate(buf, &mut pending_high);
                        buf.push(c);
                    }
                    raw.push(c);
                }
            }
        };
        if let Some(buf) = cooked.as_mut() {
            Self::flush_surrogate(buf, &mut pending_high);
        }
        let cooked_id = cooked.map(|s| self.interner.intern(&s));
        let raw_id = self.interner.intern(&raw);
        Ok((
            TokenValue::Template {
                cooked: cooked_id,
                raw: raw_id,
            },
            found_substitution,
        ))
    }

    /// Re-scan a template continuation after a `}` token that closes a
    /// substitution.  The `brace` token must be the [`TokenKind::RightBrace`]
    /// the parser is currently holding; the cursor sits just past it.
    ///
    /// Returns a [`TokenKind::TemplateMiddle`] or [`TokenKind::TemplateTail`]
    /// token spanning from the `}`.
    pub fn scan_trailing_template(
        &mut self,
        brace: &Token,
        raw_mode: bool,
    ) -> RotorResult<Token> {
        let start = brace.span.start;
        let (value, has_sub) = self.scan_template_body(start, raw_mode)?;
        let kind = if has_sub {
            TokenKind::TemplateMiddle
        } else {
            TokenKind::TemplateTail
        };
        Ok(Token {
            kind,
            value,
            span: Span {
                start,
                end: self.current_pos(),
            },
            had_line_terminator_before: brace.had_line_terminator_before,
        })
    }

    // ── Regular-expression literal ──────────────────────────────────────────

    /// Re-scan a regular-expression literal whose opening `/` (or `/=`) the
    /// parser is currently holding as `slash`.  The cursor sits just past
    /// that token; the pattern therefore starts one byte into its span.
    ///
    /// Only the syntactic shape is validated here (delimiters, classes,
    /// escapes, flag characters); pattern semantics belong to the regexp
    /// engine.
    pub fn scan_regexp(&mut self, slash: &Token) -> RotorResult<Token> {
        let start = slash.span.start;
        let pattern_start = start.offset + 1; // past '/'; a '=' from '/=' is pattern text
        let mut in_class = false;
        loop {
            match self.peek() {
                None | Some('\n') | Some('\r') | Some('\u{2028}') | Some('\u{2029}') => {
                    return Err(
                        self.syntax_error("unterminated regular expression literal", start)
                    );
                }
                Some('[') => {
                    in_class = true;
                    self.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.advance();
                }
                Some('/') if !in_class => {
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        None | Some('\n') | Some('\r') | Some('\u{2028}') | Some('\u{2029}') => {
                            return Err(self.syntax_error(
                                "unterminated regular expression literal",
                                start,
                            ));
                        }
                        _ => {
                            self.advance();
                        }
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        let pattern_text = &self.source[pattern_start..self.pos];
        self.advance(); // closing /

        let flags_start = self.pos;
        while matches!(self.peek(), Some(c) if is_id_continue(c)) {
            self.advance();
        }
        let flags_text = &self.source[flags_start..self.pos];

        let pattern = self.interner.intern(pattern_text);
        let flags = self.interner.intern(flags_text);
        let end = self.current_pos();
        Ok(Token {
            kind: TokenKind::RegExpLiteral,
            value: TokenValue::Regex { pattern, flags },
            span: Span { start, end },
            had_line_terminator_before: slash.had_line_terminator_before,
        })
    }

    // ── Numeric literal ─────────────────────────────────────────────────────

    /// Scan a numeric literal given that `first` has already been consumed.
    fn scan_numeric(&mut self, first: char, start: Position) -> RotorResult<Token> {
        let num_start = start.offset;

        if first == '0' {
            match self.peek() {
                Some('x') | Some('X') => {
                    self.advance();
                    if self.scan_hex_digits() == 0 {
                        return Err(self.syntax_error("missing hexadecimal digits", start));
                    }
                }
                Some('o') | Some('O') => {
                    self.advance();
                    if self.scan_octal_digits() == 0 {
                        return Err(self.syntax_error("missing octal digits", start));
                    }
                }
                Some('b') | Some('B') => {
                    self.advance();
                    if self.scan_binary_digits() == 0 {
                        return Err(self.syntax_error("missing binary digits", start));
                    }
                }
                Some(c) if c.is_ascii_digit() => {
                    // Legacy octal (e.g. `017`) or decimal continuation.
                    self.scan_decimal_digits();
                    if self.peek() == Some('.') {
                        self.advance();
                        self.scan_decimal_digits();
                    }
                    self.scan_exponent();
                }
                Some('.') => {
                    self.advance();
                    self.scan_decimal_digits();
                    self.scan_exponent();
                }
                Some('e') | Some('E') => {
                    self.scan_exponent();
                }
                _ => {} // bare `0`
            }
        } else if first == '.' {
            // `.5`, `.5e3`, etc. — leading dot, digits follow.
            self.scan_decimal_digits();
            self.scan_exponent();
        } else {
            // Decimal integer: first digit already consumed.
            self.scan_decimal_digits();
            if self.peek() == Some('.') {
                self.advance();
                self.scan_decimal_digits();
            }
            self.scan_exponent();
        }

        // A numeric literal may not run straight into an identifier.
        if matches!(self.peek(), Some(c) if is_id_start(c)) {
            return Err(self.syntax_error("no identifier allowed directly after number", start));
        }

        let raw = &self.source[num_start..self.pos];
        let value = parse_numeric_raw(raw);
        let end = self.current_pos();
        Ok(Token {
            kind: TokenKind::NumericLiteral,
            value: TokenValue::Number(value),
            span: Span { start, end },
            had_line_terminator_before: false, // caller patches this
        })
    }

    /// Consume an optional exponent part (`e` / `E`, optional sign, digits).
    fn scan_exponent(&mut self) {
        if matches!(self.peek(), Some('e') | Some('E')) {
            self.advance();
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.advance();
            }
            self.scan_decimal_digits();
        }
    }

    // ── Identifier / keyword ────────────────────────────────────────────────

    /// Scan an identifier whose first character `first` has already been
    /// consumed.  `first == '\\'` means the identifier opens with a unicode
    /// escape; escaped identifiers never match keywords.
    fn scan_identifier(&mut self, first: char, start: Position) -> RotorResult<Token> {
        let mut name = String::new();
        let mut any_escape = first == '\\';
        if first == '\\' {
            let c = self.read_identifier_escape(start)?;
            if !is_id_start(c) {
                return Err(self.syntax_error("invalid identifier escape", start));
            }
            name.push(c);
        } else {
            name.push(first);
        }
        loop {
            match self.peek() {
                Some(c) if is_id_continue(c) => {
                    name.push(c);
                    self.advance();
                }
                Some('\\') if self.peek2() == Some('u') => {
                    any_escape = true;
                    self.advance(); // '\'
                    let c = self.read_identifier_escape(start)?;
                    if !is_id_continue(c) {
                        return Err(self.syntax_error("invalid identifier escape", start));
                    }
                    name.push(c);
                }
                _ => break,
            }
        }
        // `let` is the identifier `let`, not the keyword.
        let kind = if any_escape {
            TokenKind::Identifier
        } else {
            keyword_kind(&name).unwrap_or(TokenKind::Identifier)
        };
        let id = self.interner.intern(&name);
        let end = self.current_pos();
        Ok(Token {
            kind,
            value: TokenValue::Ident(id),
            span: Span { start, end },
            had_line_terminator_before: false,
        })
    }

    /// After consuming `\`, decode the rest of a `\uXXXX` or `\u{…}` escape
    /// to a scalar value.
    fn read_identifier_escape(&mut self, start: Position) -> RotorResult<char> {
        if self.peek() != Some('u') {
            return Err(self.syntax_error("invalid identifier escape", start));
        }
        self.advance(); // 'u'
        match self.read_escape_sequence_for_ident()? {
            Some(c) => Ok(c),
            None => Err(self.syntax_error("invalid identifier escape", start)),
        }
    }

    /// Shared tail of `\uXXXX` / `\u{…}` decoding for identifiers, where
    /// surrogate halves are not permitted.
    fn read_escape_sequence_for_ident(&mut self) -> RotorResult<Option<char>> {
        if self.peek() == Some('{') {
            self.advance();
            let mut value = 0u32;
            let mut count = 0usize;
            while let Some(d) = self.peek() {
                if !d.is_ascii_hexdigit() {
                    break;
                }
                value = value.saturating_mul(16) + d.to_digit(16).unwrap();
                self.advance();
                count += 1;
            }
            if count == 0 || self.peek() != Some('}') || value > 0x10FFFF {
                return Ok(None);
            }
            self.advance();
            Ok(char::from_u32(value))
        } else {
            let mut value = 0u32;
            for _ in 0..4 {
                match self.peek() {
                    Some(d) if d.is_ascii_hexdigit() => {
                        value = value * 16 + d.to_digit(16).unwrap();
                        self.advance();
                    }
                    _ => return Ok(None),
                }
            }
            Ok(char::from_u32(value))
        }
    }

    // ── Main public API ─────────────────────────────────────────────────────

    /// Scan and return the next [`Token`].
    ///
    /// Returns a token with [`TokenKind::Eof`] when the input is exhausted.
    pub fn next(&mut self) -> RotorResult<Token> {
        let had_lt = self.skip_whitespace_and_comments()?;

        if self.is_eof() {
            return Ok(Token {
                kind: TokenKind::Eof,
                value: TokenValue::None,
                span: Span {
                    start: self.current_pos(),
                    end: self.current_pos(),
                },
                had_line_terminator_before: had_lt,
            });
        }

        let start = self.current_pos();
        let c = self.advance();

        let mut tok = match c {
            '"' | '\'' => self.scan_string(c, start)?,

            '`' => {
                let (value, has_sub) = self.scan_template_body(start, true)?;
                let kind = if has_sub {
                    TokenKind::TemplateHead
                } else {
                    TokenKind::NoSubstitutionTemplate
                };
                Token {
                    kind,
                    value,
                    span: Span {
                        start,
                        end: self.current_pos(),
                    },
                    had_line_terminator_before: false,
                }
            }

            c if c.is_ascii_digit() => self.scan_numeric(c, start)?,

            '.' => {
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.scan_numeric('.', start)?
                } else if self.peek() == Some('.') && self.peek2() == Some('.') {
                    self.advance();
                    self.advance();
                    self.punct(TokenKind::DotDotDot, start)
                } else {
                    self.punct(TokenKind::Dot, start)
                }
            }

            c if is_id_start(c) => self.scan_identifier(c, start)?,

            '\\' if self.peek() == Some('u') => self.scan_identifier('\\', start)?,

            '/' => {
                // Comments were consumed above, so this is division (or the
                // head of a regexp literal, which the parser requests
                // explicitly via `scan_regexp`).
                if self.peek() == Some('=') {
                    self.advance();
                    self.punct(TokenKind::SlashEqual, start)
                } else {
                    self.punct(TokenKind::Slash, start)
                }
            }

            '{' => self.punct(TokenKind::LeftBrace, start),
            '}' => self.punct(TokenKind::RightBrace, start),
            '(' => self.punct(TokenKind::LeftParen, start),
            ')' => self.punct(TokenKind::RightParen, start),
            '[' => self.punct(TokenKind::LeftBracket, start),
            ']' => self.punct(TokenKind::RightBracket, start),
            ';' => self.punct(TokenKind::Semicolon, start),
            ',' => self.punct(TokenKind::Comma, start),
            '~' => self.punct(TokenKind::Tilde, start),
            ':' => self.punct(TokenKind::Colon, start),
            '?' => self.punct(TokenKind::Question, start),

            '<' => {
                let kind = if self.peek() == Some('<') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::LessLessEqual
                    } else {
                        TokenKind::LessLess
                    }
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.punct(kind, start)
            }

            '>' => {
                let kind = if self.peek() == Some('>') {
                    self.advance();
                    if self.peek() == Some('>') {
                        self.advance();
                        if self.peek() == Some('=') {
                            self.advance();
                            TokenKind::GreaterGreaterGreaterEqual
                        } else {
                            TokenKind::GreaterGreaterGreater
                        }
                    } else if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::GreaterGreaterEqual
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.punct(kind, start)
            }

            '=' => {
                let kind = if self.peek() == Some('=') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::EqualEqualEqual
                    } else {
                        TokenKind::EqualEqual
                    }
                } else if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Equal
                };
                self.punct(kind, start)
            }

            '!' => {
                let kind = if self.peek() == Some('=') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::BangEqualEqual
                    } else {
                        TokenKind::BangEqual
                    }
                } else {
                    TokenKind::Bang
                };
                self.punct(kind, start)
            }

            '+' => {
                let kind = if self.peek() == Some('+') {
                    self.advance();
                    TokenKind::PlusPlus
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                };
                self.punct(kind, start)
            }

            '-' => {
                let kind = if self.peek() == Some('-') {
                    self.advance();
                    TokenKind::MinusMinus
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::MinusEqual
                } else {
                    TokenKind::Minus
                };
                self.punct(kind, start)
            }

            '*' => {
                let kind = if self.peek() == Some('*') {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::StarStarEqual
                    } else {
                        TokenKind::StarStar
                    }
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                };
                self.punct(kind, start)
            }

            '%' => {
                let kind = if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::PercentEqual
                } else {
                    TokenKind::Percent
                };
                self.punct(kind, start)
            }

            '&' => {
                let kind = if self.peek() == Some('&') {
                    self.advance();
                    TokenKind::AmpersandAmpersand
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::AmpersandEqual
                } else {
                    TokenKind::Ampersand
                };
                self.punct(kind, start)
            }

            '|' => {
                let kind = if self.peek() == Some('|') {
                    self.advance();
                    TokenKind::PipePipe
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::PipeEqual
                } else {
                    TokenKind::Pipe
                };
                self.punct(kind, start)
            }

            '^' => {
                let kind = if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::CaretEqual
                } else {
                    TokenKind::Caret
                };
                self.punct(kind, start)
            }

            _ => {
                return Err(self.syntax_error(format!("unexpected character {c:?}"), start));
            }
        };

        tok.had_line_terminator_before = had_lt;
        Ok(tok)
    }

    fn punct(&self, kind: TokenKind, start: Position) -> Token {
        Token {
            kind,
            value: TokenValue::None,
            span: Span {
                start,
                end: self.current_pos(),
            },
            had_line_terminator_before: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric parsing helper
// ─────────────────────────────────────────────────────────────────────────────

/// Parse the raw text of a numeric literal to an `f64`.
///
/// Returns [`f64::NAN`] if the raw text cannot be parsed (should not happen
/// for well-formed input).
fn parse_numeric_raw(raw: &str) -> f64 {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map(|n| n as f64).unwrap_or(f64::NAN)
    } else if let Some(oct) = raw.strip_prefix("0o").or_else(|| raw.strip_prefix("0O")) {
        u64::from_str_radix(oct, 8).map(|n| n as f64).unwrap_or(f64::NAN)
    } else if let Some(bin) = raw.strip_prefix("0b").or_else(|| raw.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2).map(|n| n as f64).unwrap_or(f64::NAN)
    } else if raw.len() > 1
        && raw.starts_with('0')
        && raw.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        // Legacy octal: `017` == 15.
        u64::from_str_radix(&raw[1..], 8).map(|n| n as f64).unwrap_or(f64::NAN)
    } else {
        raw.parse::<f64>().unwrap_or(f64::NAN)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    /// Tokenise `src` and return the token kinds (without the EOF sentinel).
    fn kinds(src: &str) -> Vec<TokenKind> {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new(src, &mut interner);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push(tok.kind);
        }
        out
    }

    /// Tokenise `src` and return `(kind, resolved payload text)` pairs.
    fn tokens_with_text(src: &str) -> Vec<(TokenKind, Option<String>)> {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new(src, &mut interner);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            let text = match tok.value {
                TokenValue::Ident(id) => Some(lexer.interner().resolve(id).to_owned()),
                TokenValue::Str { value, .. } => Some(lexer.interner().resolve(value).to_owned()),
                _ => None,
            };
            out.push((tok.kind, text));
        }
        out
    }

    // ── Keywords and identifiers ─────────────────────────────────────────────

    #[test]
    fn test_keywords_and_contextual() {
        assert_eq!(
            kinds("function let of static implements foo"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::Of,
                TokenKind::Static,
                TokenKind::Implements,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_keywords_carry_ident_payload() {
        let toks = tokens_with_text("function default");
        assert_eq!(toks[0].1.as_deref(), Some("function"));
        assert_eq!(toks[1].1.as_deref(), Some("default"));
    }

    #[test]
    fn test_escaped_keyword_is_identifier() {
        // `\u006Cet` spells "let" but must lex as an identifier.
        let toks = tokens_with_text(r"\u006Cet");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].0, TokenKind::Identifier);
        assert_eq!(toks[0].1.as_deref(), Some("let"));
    }

    #[test]
    fn test_interned_identity_across_tokens() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("abc xyz abc", &mut interner);
        let a1 = lexer.next().unwrap().ident_value().unwrap();
        let _ = lexer.next().unwrap();
        let a2 = lexer.next().unwrap().ident_value().unwrap();
        assert_eq!(a1, a2);
    }

    // ── Punctuators ──────────────────────────────────────────────────────────

    #[test]
    fn test_punctuator_maximal_munch() {
        assert_eq!(
            kinds(">>>= === !== => ... **"),
            vec![
                TokenKind::GreaterGreaterGreaterEqual,
                TokenKind::EqualEqualEqual,
                TokenKind::BangEqualEqual,
                TokenKind::Arrow,
                TokenKind::DotDotDot,
                TokenKind::StarStar,
            ]
        );
    }

    #[test]
    fn test_slash_is_division_by_default() {
        assert_eq!(
            kinds("a / b /= c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::SlashEqual,
                TokenKind::Identifier,
            ]
        );
    }

    // ── Numbers ──────────────────────────────────────────────────────────────

    #[test]
    fn test_numeric_forms() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("0 1.5 .25 0x10 0b101 0o17 017 1e3", &mut interner);
        let mut values = Vec::new();
        loop {
            let tok = lexer.next().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            values.push(tok.number_value().unwrap());
        }
        assert_eq!(values, vec![0.0, 1.5, 0.25, 16.0, 5.0, 15.0, 15.0, 1000.0]);
    }

    #[test]
    fn test_number_cannot_touch_identifier() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("3in", &mut interner);
        assert!(lexer.next().is_err());
    }

    // ── Strings ──────────────────────────────────────────────────────────────

    #[test]
    fn test_string_cooking() {
        let toks = tokens_with_text(r#""a\nb" 'it\'s'"#);
        assert_eq!(toks[0].1.as_deref(), Some("a\nb"));
        assert_eq!(toks[1].1.as_deref(), Some("it's"));
    }

    #[test]
    fn test_string_escape_flag() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new(r#""plain" "escaped""#, &mut interner);
        let t1 = lexer.next().unwrap();
        let t2 = lexer.next().unwrap();
        assert!(matches!(t1.value, TokenValue::Str { escaped: false, .. }));
        assert!(matches!(t2.value, TokenValue::Str { escaped: true, .. }));
    }

    #[test]
    fn test_surrogate_pair_escape() {
        let toks = tokens_with_text(r#""😀""#);
        assert_eq!(toks[0].1.as_deref(), Some("😀"));
    }

    #[test]
    fn test_unterminated_string() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("\"abc\n\"", &mut interner);
        assert!(lexer.next().is_err());
    }

    // ── Templates ────────────────────────────────────────────────────────────

    #[test]
    fn test_no_substitution_template() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("`hi`", &mut interner);
        let tok = lexer.next().unwrap();
        assert_eq!(tok.kind, TokenKind::NoSubstitutionTemplate);
        match tok.value {
            TokenValue::Template { cooked, raw } => {
                assert_eq!(lexer.interner().resolve(cooked.unwrap()), "hi");
                assert_eq!(lexer.interner().resolve(raw), "hi");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_template_head_and_trailing() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("`a${x}b${y}c`", &mut interner);
        let head = lexer.next().unwrap();
        assert_eq!(head.kind, TokenKind::TemplateHead);
        let x = lexer.next().unwrap();
        assert_eq!(x.kind, TokenKind::Identifier);
        let brace = lexer.next().unwrap();
        assert_eq!(brace.kind, TokenKind::RightBrace);
        let mid = lexer.scan_trailing_template(&brace, false).unwrap();
        assert_eq!(mid.kind, TokenKind::TemplateMiddle);
        let y = lexer.next().unwrap();
        assert_eq!(y.kind, TokenKind::Identifier);
        let brace2 = lexer.next().unwrap();
        let tail = lexer.scan_trailing_template(&brace2, false).unwrap();
        assert_eq!(tail.kind, TokenKind::TemplateTail);
    }

    #[test]
    fn test_template_invalid_escape_raw_mode() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        // `\u{}` is malformed: tagged position yields cooked == None.
        let mut lexer = Lexer::new(r"`bad\u{}`", &mut interner);
        let tok = lexer.next().unwrap();
        assert!(matches!(
            tok.value,
            TokenValue::Template { cooked: None, .. }
        ));
    }

    // ── Regular expressions ──────────────────────────────────────────────────

    #[test]
    fn test_scan_regexp() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("/a[/]b\\//gi", &mut interner);
        let slash = lexer.next().unwrap();
        assert_eq!(slash.kind, TokenKind::Slash);
        let re = lexer.scan_regexp(&slash).unwrap();
        assert_eq!(re.kind, TokenKind::RegExpLiteral);
        match re.value {
            TokenValue::Regex { pattern, flags } => {
                assert_eq!(lexer.interner().resolve(pattern), "a[/]b\\/");
                assert_eq!(lexer.interner().resolve(flags), "gi");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_scan_regexp_from_slash_equal() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("/=x/", &mut interner);
        let slash = lexer.next().unwrap();
        assert_eq!(slash.kind, TokenKind::SlashEqual);
        let re = lexer.scan_regexp(&slash).unwrap();
        match re.value {
            TokenValue::Regex { pattern, .. } => {
                assert_eq!(lexer.interner().resolve(pattern), "=x");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    // ── Line terminators, comments, save/restore ─────────────────────────────

    #[test]
    fn test_line_terminator_flag() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("a\nb /* c\n */ d e", &mut interner);
        let a = lexer.next().unwrap();
        let b = lexer.next().unwrap();
        let d = lexer.next().unwrap();
        let e = lexer.next().unwrap();
        assert!(!a.had_line_terminator_before);
        assert!(b.had_line_terminator_before);
        assert!(d.had_line_terminator_before, "newline inside block comment counts");
        assert!(!e.had_line_terminator_before);
    }

    #[test]
    fn test_shebang_skipped() {
        assert_eq!(
            kinds("#!/usr/bin/env rotor\nvar x"),
            vec![TokenKind::Var, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_save_restore_determinism() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("foo + bar * baz", &mut interner);
        let _foo = lexer.next().unwrap();
        let state = lexer.save();
        let first: Vec<Token> = (0..4).map(|_| lexer.next().unwrap()).collect();
        lexer.restore(state);
        let second: Vec<Token> = (0..4).map(|_| lexer.next().unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_positions() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut lexer = Lexer::new("ab\n  cd", &mut interner);
        let ab = lexer.next().unwrap();
        assert_eq!(ab.span.start.offset, 0);
        assert_eq!(ab.span.start.line, 1);
        assert_eq!(ab.span.start.column, 1);
        let cd = lexer.next().unwrap();
        assert_eq!(cd.span.start.offset, 5);
        assert_eq!(cd.span.start.line, 2);
        assert_eq!(cd.span.start.column, 3);
    }
}
