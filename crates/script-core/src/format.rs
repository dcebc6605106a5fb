//! JavaScript Formatter
//!
//! Re-indents snippet source with a fixed indent width. Only whitespace
//! between tokens changes: string, template, regex and comment contents are
//! copied verbatim, and existing line breaks are never removed except in
//! front of `else`, `catch` and `finally`.

/// Formatting knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indentation level
    pub indent_size: usize,
    /// Consecutive line breaks kept from the input (2 = one blank line)
    pub max_preserved_newlines: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_preserved_newlines: 2,
        }
    }
}

/// Format JavaScript source
pub fn format_js(source: &str, options: &FormatOptions) -> String {
    let tokens = tokenize(source);
    Printer::new(options).print(&tokens)
}

// ========================
// Tokenizer
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Identifier, keyword or number
    Word,
    Punct,
    Str,
    Template,
    Regex,
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone)]
struct Token {
    kind: Kind,
    text: String,
    /// Line breaks between the previous token and this one
    newlines_before: usize,
    /// Any whitespace between the previous token and this one
    space_before: bool,
    /// Word used as a property name (`a.delete`)
    property: bool,
    /// `)` ending an `if`/`while`/`for`/`with` clause, or `}` ending a block
    closes_statement: bool,
}

impl Token {
    fn is(&self, text: &str) -> bool {
        self.kind == Kind::Punct && self.text == text
    }

    fn is_word(&self, text: &str) -> bool {
        self.kind == Kind::Word && self.text == text
    }

    fn is_comment(&self) -> bool {
        matches!(self.kind, Kind::LineComment | Kind::BlockComment)
    }

    fn is_number(&self) -> bool {
        self.kind == Kind::Word
            && self.text.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.')
    }

    fn is_keyword(&self) -> bool {
        self.kind == Kind::Word && !self.property && KEYWORDS.contains(&self.text.as_str())
    }
}

/// Multi-character punctuators, longest first
const OPERATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==", "!=",
    "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "**", "<<", ">>",
];

/// Operators that are always binary
const BINARY_OPERATORS: &[&str] = &[
    "=", "==", "===", "!=", "!==", "<", ">", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=",
    ">>=", ">>>=", "&=", "|=", "^=", "&&=", "||=", "??=", "=>", "&&", "||", "??", "*", "/", "%",
    "**", "<<", ">>", ">>>", "&", "|", "^",
];

/// Keywords after which an expression (not an operand end) follows
const KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "return", "typeof", "instanceof", "in", "of",
    "new", "delete", "void", "throw", "case", "do", "else", "yield", "await", "const", "let", "var",
];

/// Keywords that take a parenthesised clause and read better with a space
const SPACED_BEFORE_PAREN: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "return", "typeof", "void", "delete", "await",
    "yield", "in", "of", "instanceof", "throw", "case", "else", "do", "async",
];

/// Keywords whose parenthesised clause is followed by a statement
const CLAUSE_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

/// Keywords that continue a preceding `}` on the same line
const CONTINUATIONS: &[&str] = &["else", "catch", "finally"];

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut newlines = 0;
    let mut space = false;
    // per open bracket: clause paren / statement block
    let mut parens: Vec<bool> = Vec::new();
    let mut blocks: Vec<bool> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '\n' {
            newlines += 1;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            space = true;
            i += 1;
            continue;
        }

        let start = i;
        let kind = if c == '/' && next == Some('/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            Kind::LineComment
        } else if c == '/' && next == Some('*') {
            i = scan_block_comment(&chars, i);
            Kind::BlockComment
        } else if c == '"' || c == '\'' {
            i = scan_string(&chars, i);
            Kind::Str
        } else if c == '`' {
            i = scan_template(&chars, i);
            Kind::Template
        } else if c.is_ascii_digit() || (c == '.' && next.is_some_and(|n| n.is_ascii_digit())) {
            i = scan_number(&chars, i);
            Kind::Word
        } else if is_ident_start(c) {
            while i < chars.len() && is_ident_char(chars[i]) {
                i += 1;
            }
            Kind::Word
        } else if c == '/' && regex_allowed(last_significant(&tokens)) {
            match scan_regex(&chars, i) {
                Some(end) => {
                    i = end;
                    Kind::Regex
                }
                None => {
                    i = scan_punct(&chars, i);
                    Kind::Punct
                }
            }
        } else {
            i = scan_punct(&chars, i);
            Kind::Punct
        };

        let text: String = chars[start..i].iter().collect();
        let prev = last_significant(&tokens);
        let property = kind == Kind::Word && prev.is_some_and(|p| p.is(".") || p.is("?."));
        let mut closes_statement = false;
        if kind == Kind::Punct {
            match text.as_str() {
                "(" => parens.push(prev.is_some_and(|p| {
                    p.kind == Kind::Word && !p.property && CLAUSE_KEYWORDS.contains(&p.text.as_str())
                })),
                ")" => closes_statement = parens.pop().unwrap_or(false),
                "{" => blocks.push(!opens_object(prev)),
                "}" => closes_statement = blocks.pop().unwrap_or(false),
                _ => {}
            }
        }

        tokens.push(Token {
            kind,
            text,
            newlines_before: newlines,
            space_before: space || newlines > 0,
            property,
            closes_statement,
        });
        newlines = 0;
        space = false;
    }

    tokens
}

fn last_significant(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().rev().find(|t| !t.is_comment())
}

fn regex_allowed(prev: Option<&Token>) -> bool {
    match prev {
        None => true,
        Some(t) => match t.kind {
            Kind::Punct => match t.text.as_str() {
                ")" | "}" => t.closes_statement,
                "]" => false,
                _ => true,
            },
            Kind::Word => t.is_keyword(),
            _ => false,
        },
    }
}

fn scan_block_comment(chars: &[char], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return i + 2;
        }
        i += 1;
    }
    chars.len()
}

fn scan_string(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

fn scan_template(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '`' => return i + 1,
            '$' if chars.get(i + 1) == Some(&'{') => i = scan_template_expr(chars, i + 2),
            _ => i += 1,
        }
    }
    chars.len()
}

/// Skip a `${ ... }` substitution, starting just after the `{`
fn scan_template_expr(chars: &[char], start: usize) -> usize {
    let mut depth = 1;
    let mut i = start;
    while i < chars.len() {
        match chars[i] {
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return i;
                }
            }
            '"' | '\'' => i = scan_string(chars, i),
            '`' => i = scan_template(chars, i),
            _ => i += 1,
        }
    }
    chars.len()
}

fn scan_number(chars: &[char], start: usize) -> usize {
    let hex = chars[start] == '0' && matches!(chars.get(start + 1), Some('x' | 'X'));
    let mut seen_dot = false;
    let mut i = start;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_alphanumeric() || c == '_' {
            i += 1;
        } else if c == '.' && !seen_dot && !hex && !chars.get(i + 1).copied().is_some_and(is_ident_start) {
            seen_dot = true;
            i += 1;
        } else if (c == '+' || c == '-') && !hex && matches!(chars[i - 1], 'e' | 'E') {
            i += 1;
        } else {
            break;
        }
    }
    i
}

fn scan_regex(chars: &[char], start: usize) -> Option<usize> {
    let mut in_class = false;
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\n' => return None,
            '[' => {
                in_class = true;
                i += 1;
            }
            ']' => {
                in_class = false;
                i += 1;
            }
            '/' if !in_class => {
                i += 1;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                return Some(i);
            }
            _ => i += 1,
        }
    }
    None
}

fn scan_punct(chars: &[char], start: usize) -> usize {
    for op in OPERATORS {
        let len = op.chars().count();
        if start + len <= chars.len() && chars[start..start + len].iter().copied().eq(op.chars()) {
            // `a?.5:b` is a ternary, not optional chaining
            if *op == "?." && chars.get(start + 2).is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }
            return start + len;
        }
    }
    start + 1
}

// ========================
// Printer
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Binary,
    Unary,
    Prefix,
    Postfix,
    Other,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Indent level of the bracket's contents
    indent: usize,
    object: bool,
    in_parens: bool,
    /// Unmatched ternary `?` in this bracket
    ternaries: usize,
    /// Past a `case`/`default` label: statements sit one level deeper
    in_case: bool,
}

impl Frame {
    fn root() -> Self {
        Self {
            indent: 0,
            object: false,
            in_parens: false,
            ternaries: 0,
            in_case: false,
        }
    }
}

struct Printer<'o> {
    options: &'o FormatOptions,
    out: String,
    stack: Vec<Frame>,
    line_indent: usize,
    /// Saw `case`/`default`, waiting for its `:`
    pending_case: bool,
}

impl<'o> Printer<'o> {
    fn new(options: &'o FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            stack: vec![Frame::root()],
            line_indent: 0,
            pending_case: false,
        }
    }

    fn top(&self) -> Frame {
        self.stack.last().copied().unwrap_or_else(Frame::root)
    }

    fn top_mut(&mut self) -> Option<&mut Frame> {
        self.stack.last_mut()
    }

    fn print(mut self, tokens: &[Token]) -> String {
        let mut force_break = false;
        let mut prev_role = Role::Other;
        let mut closed_object = false;

        for (index, token) in tokens.iter().enumerate() {
            let prev = index.checked_sub(1).map(|i| &tokens[i]);
            let prev_sig = last_significant(&tokens[..index]);
            let role = self.role_of(token, prev_sig);

            let mut newlines = token.newlines_before.min(self.options.max_preserved_newlines);
            let joins_brace = prev.is_some_and(|p| p.is("}"))
                && token.kind == Kind::Word
                && CONTINUATIONS.contains(&token.text.as_str());
            if joins_brace {
                newlines = 0;
            } else if token.is("}") && !prev.is_some_and(|p| p.is("{")) && prev.is_some() {
                newlines = newlines.max(1);
            } else if force_break && !(token.kind == Kind::LineComment && token.newlines_before == 0) {
                newlines = newlines.max(1);
            }

            match prev {
                None => self.start_line(token),
                Some(_) if newlines > 0 => {
                    self.break_lines(newlines);
                    self.start_line(token);
                }
                Some(p) => {
                    if self.space_between(p, prev_role, token, role) {
                        self.out.push(' ');
                    }
                }
            }
            self.out.push_str(&token.text);

            let next = tokens.get(index + 1);
            force_break = self.update_nesting(token, prev_sig, role, &mut closed_object);
            force_break = force_break && self.break_after(token, next, closed_object);
            prev_role = role;
        }

        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        self.out
    }

    fn break_lines(&mut self, count: usize) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        for _ in 0..count {
            self.out.push('\n');
        }
    }

    fn start_line(&mut self, token: &Token) {
        let top = self.top();
        let closes = matches!(token.text.as_str(), "}" | ")" | "]") && token.kind == Kind::Punct;
        let label = token.kind == Kind::Word && !token.property && matches!(token.text.as_str(), "case" | "default");
        self.line_indent = if closes && self.stack.len() > 1 {
            top.indent.saturating_sub(1)
        } else if top.in_case && !label {
            top.indent + 1
        } else {
            top.indent
        };
        let width = self.line_indent * self.options.indent_size;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn role_of(&self, token: &Token, prev_sig: Option<&Token>) -> Role {
        if token.kind != Kind::Punct {
            return Role::Other;
        }
        let operand_before = prev_sig.is_some_and(ends_operand);
        match token.text.as_str() {
            "*" if prev_sig.is_some_and(|p| p.is_word("function") || p.is_word("yield")) => Role::Other,
            "+" | "-" if operand_before => Role::Binary,
            "+" | "-" | "!" | "~" => Role::Unary,
            "++" | "--" if operand_before && token.newlines_before == 0 => Role::Postfix,
            "++" | "--" => Role::Prefix,
            "?" => Role::Binary,
            ":" if self.top().ternaries > 0 => Role::Binary,
            op if BINARY_OPERATORS.contains(&op) => Role::Binary,
            _ => Role::Other,
        }
    }

    fn space_between(&self, prev: &Token, prev_role: Role, token: &Token, role: Role) -> bool {
        if token.is_comment() || prev.kind == Kind::BlockComment {
            return token.space_before || token.kind == Kind::LineComment;
        }
        if prev.kind == Kind::Punct && token.kind == Kind::Punct && token.space_before && could_glue(&prev.text, &token.text) {
            return true;
        }
        if prev.is_number() && token.is(".") {
            return token.space_before;
        }

        let p = prev.text.as_str();
        let t = token.text.as_str();

        if token.kind == Kind::Punct && matches!(t, ")" | "]" | "," | ";" | "." | "?.") {
            return false;
        }
        if prev.kind == Kind::Punct && matches!(p, "(" | "[" | "." | "?." | "..." | "#" | "@") {
            return false;
        }
        if matches!(prev_role, Role::Unary | Role::Prefix) || role == Role::Postfix {
            return false;
        }
        if token.is("(") {
            return match prev.kind {
                Kind::Word => !prev.property && SPACED_BEFORE_PAREN.contains(&p),
                Kind::Punct if p == ")" => prev.closes_statement,
                Kind::Punct if p == "]" => false,
                Kind::Punct => prev_role == Role::Binary || matches!(p, "," | ";" | "{" | "}" | ":"),
                _ => false,
            };
        }
        if token.is("[") && (prev.kind == Kind::Word || prev.is(")") || prev.is("]")) {
            return prev.is_keyword() || prev.closes_statement;
        }
        if token.is("}") {
            return !prev.is("{");
        }
        if token.is("{") || prev.is(",") || prev.is(";") || prev.is("{") {
            return true;
        }
        if role == Role::Binary || prev_role == Role::Binary {
            return true;
        }
        if token.is(":") {
            return false;
        }
        if prev.is(":") || prev.is("}") || (prev.is(")") && (token.kind == Kind::Word || prev.closes_statement)) {
            return true;
        }
        if prev.kind == Kind::Word && token.kind == Kind::Word {
            return true;
        }
        token.space_before
    }

    /// Track bracket nesting; returns whether a line break may follow
    fn update_nesting(&mut self, token: &Token, prev_sig: Option<&Token>, role: Role, closed_object: &mut bool) -> bool {
        if token.kind == Kind::Word && !token.property && matches!(token.text.as_str(), "case" | "default") {
            self.pending_case = true;
        }
        if token.kind != Kind::Punct {
            return token.kind == Kind::LineComment;
        }
        match token.text.as_str() {
            "{" | "(" | "[" => {
                let object = token.is("{") && opens_object(prev_sig);
                self.stack.push(Frame {
                    indent: self.line_indent + 1,
                    object,
                    in_parens: token.is("("),
                    ternaries: 0,
                    in_case: false,
                });
                token.is("{")
            }
            "}" | ")" | "]" => {
                *closed_object = false;
                if self.stack.len() > 1 {
                    if let Some(frame) = self.stack.pop() {
                        *closed_object = frame.object;
                    }
                }
                token.is("}")
            }
            "?" if role == Role::Binary => {
                if let Some(frame) = self.top_mut() {
                    frame.ternaries += 1;
                }
                false
            }
            ":" if role == Role::Binary => {
                if let Some(frame) = self.top_mut() {
                    frame.ternaries -= 1;
                }
                false
            }
            ":" if self.pending_case && !self.top().object => {
                self.pending_case = false;
                if let Some(frame) = self.top_mut() {
                    frame.in_case = true;
                }
                true
            }
            ";" => !self.top().in_parens,
            "," => self.top().object,
            _ => false,
        }
    }

    /// Whether the line break requested after `token` applies given what follows
    fn break_after(&self, token: &Token, next: Option<&Token>, closed_object: bool) -> bool {
        let Some(next) = next else {
            return false;
        };
        if next.kind == Kind::LineComment && next.newlines_before == 0 && token.kind != Kind::LineComment {
            return false;
        }
        if token.is("{") {
            return !next.is("}");
        }
        if token.is("}") {
            if closed_object {
                return false;
            }
            if next.kind == Kind::Punct && matches!(next.text.as_str(), ")" | "]" | "," | ";" | "." | "?.") {
                return false;
            }
            if next.kind == Kind::Word && CONTINUATIONS.contains(&next.text.as_str()) {
                return false;
            }
            if next.is_word("while") && next.newlines_before == 0 {
                return false;
            }
        }
        true
    }
}

fn ends_operand(token: &Token) -> bool {
    match token.kind {
        Kind::Word => !token.is_keyword(),
        Kind::Str | Kind::Template | Kind::Regex => true,
        Kind::Punct => match token.text.as_str() {
            ")" => !token.closes_statement,
            "]" | "++" | "--" => true,
            _ => false,
        },
        _ => false,
    }
}

fn opens_object(prev_sig: Option<&Token>) -> bool {
    match prev_sig {
        Some(t) if t.kind == Kind::Punct => {
            matches!(t.text.as_str(), "=" | "(" | "[" | "," | ":" | "?" | "||" | "&&" | "??")
        }
        Some(t) => t.is_word("return"),
        None => false,
    }
}

/// Whether two punctuators would read as a different token once adjacent
fn could_glue(prev: &str, next: &str) -> bool {
    const GLUE: &str = "+-*/%&|^<>=!?.:";
    let last = prev.chars().last();
    let first = next.chars().next();
    matches!((last, first), (Some(a), Some(b)) if GLUE.contains(a) && GLUE.contains(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(source: &str) -> String {
        format_js(source, &FormatOptions::default())
    }

    #[test]
    fn test_function_body() {
        assert_eq!(fmt("function f(){return 1;}"), "function f() {\n  return 1;\n}");
    }

    #[test]
    fn test_if_else_joined() {
        assert_eq!(fmt("if(a){b()}\nelse{c()}"), "if (a) {\n  b()\n} else {\n  c()\n}");
    }

    #[test]
    fn test_callback_single_indent() {
        assert_eq!(fmt("foo(function(){bar();});"), "foo(function() {\n  bar();\n});");
    }

    #[test]
    fn test_for_loop_stays_on_one_line() {
        assert_eq!(
            fmt("for(var i=0;i<3;i++){x+=i}"),
            "for (var i = 0; i < 3; i++) {\n  x += i\n}"
        );
    }

    #[test]
    fn test_object_literal() {
        assert_eq!(
            fmt("var o={a:1,b:[1,2]};"),
            "var o = {\n  a: 1,\n  b: [1, 2]\n};"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let out = fmt("function a(){if(x){y();}}");
        assert_eq!(out, "function a() {\n  if (x) {\n    y();\n  }\n}");
    }

    #[test]
    fn test_literals_untouched() {
        let src = "var s = \"a{b;c}\";\nvar t = `x ${ {a:1}.a } y`;\nvar r = /[/{]+;/g;";
        let out = fmt(src);
        assert!(out.contains("\"a{b;c}\""));
        assert!(out.contains("`x ${ {a:1}.a } y`"));
        assert!(out.contains("/[/{]+;/g"));
    }

    #[test]
    fn test_comments_kept() {
        let out = fmt("a(); // run\n/* block { */ b();");
        assert_eq!(out, "a(); // run\n/* block { */ b();");
    }

    #[test]
    fn test_ternary_and_unary() {
        assert_eq!(fmt("x=a?-1:b"), "x = a ? -1 : b");
        assert_eq!(fmt("y=!z&&w"), "y = !z && w");
    }

    #[test]
    fn test_operators_not_glued() {
        assert_eq!(fmt("a - -b"), "a - -b");
        assert_eq!(fmt("a+ +b"), "a + +b");
        assert_eq!(fmt("i++ + j"), "i++ + j");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(fmt("a();\n\n\n\nb();"), "a();\n\nb();");
    }

    #[test]
    fn test_existing_newlines_kept() {
        // no line is joined, so automatic semicolon insertion is unaffected
        assert_eq!(fmt("let a = 1\nlet b = 2"), "let a = 1\nlet b = 2");
        assert_eq!(fmt("return\nx"), "return\nx");
    }

    #[test]
    fn test_idempotent() {
        let src = "document.querySelectorAll('a').forEach(function(el){if(el.href){el.style.color='red'}else{el.remove()}});\nvar cfg={on:true,list:[1,2,3]};";
        let once = fmt(src);
        assert_eq!(fmt(&once), once);
    }

    #[test]
    fn test_indent_size_option() {
        let options = FormatOptions { indent_size: 4, ..FormatOptions::default() };
        assert_eq!(format_js("if(a){b()}", &options), "if (a) {\n    b()\n}");
    }

    #[test]
    fn test_regex_after_block() {
        assert_eq!(
            fmt("function f() {}\n/^a b/.test(s) && go()"),
            "function f() {}\n/^a b/.test(s) && go()"
        );
    }

    #[test]
    fn test_regex_after_clause_paren() {
        assert_eq!(fmt("if (a) /b/.test(c)"), "if (a) /b/.test(c)");
        assert_eq!(fmt("while(ok)/x y/g.exec(s)"), "while (ok) /x y/g.exec(s)");
        assert_eq!(fmt("if (a) -b"), "if (a) -b");
    }

    #[test]
    fn test_division_after_value() {
        assert_eq!(fmt("x=(a)/2/b"), "x = (a) / 2 / b");
        assert_eq!(fmt("y=o[k]/2"), "y = o[k] / 2");
    }

    #[test]
    fn test_keyword_property_names() {
        assert_eq!(fmt("p.catch(e => e)"), "p.catch(e => e)");
        assert_eq!(fmt("seen.delete(k)"), "seen.delete(k)");
        assert_eq!(fmt("Array.of(1,2)"), "Array.of(1, 2)");
        assert_eq!(fmt("a?.for(x)"), "a?.for(x)");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(fmt("if(a){}"), "if (a) {}");
        assert_eq!(fmt("var o={};"), "var o = {};");
    }

    #[test]
    fn test_case_bodies_indented() {
        assert_eq!(
            fmt("switch(a){case 1:b();break;default:c()}"),
            "switch (a) {\n  case 1:\n    b();\n    break;\n  default:\n    c()\n}"
        );
    }

    #[test]
    fn test_case_with_ternary_and_block() {
        let out = fmt("switch(a){case x?1:2:if(y){z()}}");
        assert_eq!(out, "switch (a) {\n  case x ? 1 : 2:\n    if (y) {\n      z()\n    }\n}");
        assert_eq!(fmt(&out), out);
    }

    #[test]
    fn test_async_arrow() {
        assert_eq!(fmt("const f=async()=>x"), "const f = async () => x");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fmt(""), "");
        assert_eq!(fmt("   \n  "), "");
    }
}
