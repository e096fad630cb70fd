//! Operator binding strengths.
//!
//! A single total order shared by the expression parser (which looks
//! precedences up by token kind) and the tree printer (which re-derives them
//! from the operator text of an already-built node). Both entry points go
//! through [`of_kind`] so the two views cannot drift apart.

use super::lexer::TokenKind;

/// Binding strength, strongest last. `Lowest` doubles as the entry
/// precedence for a full expression and as the answer for non-operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Assign,
    Ternary,
    LogicalOr,
    LogicalAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Relational,
    Shift,
    Sum,
    Product,
    Prefix,
    Postfix,
    Call,
    Index,
}

/// Precedence of a token kind. Non-operators answer `Lowest`, which makes
/// the Pratt loop stop in front of them.
pub fn of_kind(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Assign
        | TokenKind::PlusAssign
        | TokenKind::MinusAssign
        | TokenKind::StarAssign
        | TokenKind::SlashAssign
        | TokenKind::PercentAssign
        | TokenKind::AmpAssign
        | TokenKind::PipeAssign
        | TokenKind::CaretAssign
        | TokenKind::ShlAssign
        | TokenKind::ShrAssign => Precedence::Assign,
        TokenKind::Question => Precedence::Ternary,
        TokenKind::OrOr => Precedence::LogicalOr,
        TokenKind::AndAnd => Precedence::LogicalAnd,
        TokenKind::Pipe => Precedence::BitOr,
        TokenKind::Caret => Precedence::BitXor,
        TokenKind::Amp => Precedence::BitAnd,
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equality,
        TokenKind::Lt | TokenKind::Gt | TokenKind::Le | TokenKind::Ge => Precedence::Relational,
        TokenKind::Shl | TokenKind::Shr => Precedence::Shift,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
        TokenKind::Inc | TokenKind::Dec => Precedence::Postfix,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Precedence of an operator by its source text, for consumers that only
/// hold a built node (the renderer and the tree printer). Delegates to
/// [`of_kind`] via the text-to-kind mapping below.
pub fn of_operator(operator: &str) -> Precedence {
    match kind_of_operator(operator) {
        Some(kind) => of_kind(kind),
        None => Precedence::Lowest,
    }
}

fn kind_of_operator(operator: &str) -> Option<TokenKind> {
    let kind = match operator {
        "=" => TokenKind::Assign,
        "+=" => TokenKind::PlusAssign,
        "-=" => TokenKind::MinusAssign,
        "*=" => TokenKind::StarAssign,
        "/=" => TokenKind::SlashAssign,
        "%=" => TokenKind::PercentAssign,
        "&=" => TokenKind::AmpAssign,
        "|=" => TokenKind::PipeAssign,
        "^=" => TokenKind::CaretAssign,
        "<<=" => TokenKind::ShlAssign,
        ">>=" => TokenKind::ShrAssign,
        "?" => TokenKind::Question,
        "||" => TokenKind::OrOr,
        "&&" => TokenKind::AndAnd,
        "|" => TokenKind::Pipe,
        "^" => TokenKind::Caret,
        "&" => TokenKind::Amp,
        "==" => TokenKind::Eq,
        "!=" => TokenKind::NotEq,
        "<" => TokenKind::Lt,
        ">" => TokenKind::Gt,
        "<=" => TokenKind::Le,
        ">=" => TokenKind::Ge,
        "<<" => TokenKind::Shl,
        ">>" => TokenKind::Shr,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "%" => TokenKind::Percent,
        "++" => TokenKind::Inc,
        "--" => TokenKind::Dec,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Precedence::Lowest < Precedence::Assign);
        assert!(Precedence::Assign < Precedence::Ternary);
        assert!(Precedence::Ternary < Precedence::LogicalOr);
        assert!(Precedence::LogicalOr < Precedence::LogicalAnd);
        assert!(Precedence::LogicalAnd < Precedence::BitOr);
        assert!(Precedence::BitOr < Precedence::BitXor);
        assert!(Precedence::BitXor < Precedence::BitAnd);
        assert!(Precedence::BitAnd < Precedence::Equality);
        assert!(Precedence::Equality < Precedence::Relational);
        assert!(Precedence::Relational < Precedence::Shift);
        assert!(Precedence::Shift < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Postfix);
        assert!(Precedence::Postfix < Precedence::Call);
        assert!(Precedence::Call < Precedence::Index);
    }

    #[test]
    fn test_entry_points_agree_for_every_operator_text() {
        let operators = [
            ("=", TokenKind::Assign),
            ("+=", TokenKind::PlusAssign),
            ("-=", TokenKind::MinusAssign),
            ("*=", TokenKind::StarAssign),
            ("/=", TokenKind::SlashAssign),
            ("%=", TokenKind::PercentAssign),
            ("&=", TokenKind::AmpAssign),
            ("|=", TokenKind::PipeAssign),
            ("^=", TokenKind::CaretAssign),
            ("<<=", TokenKind::ShlAssign),
            (">>=", TokenKind::ShrAssign),
            ("?", TokenKind::Question),
            ("||", TokenKind::OrOr),
            ("&&", TokenKind::AndAnd),
            ("|", TokenKind::Pipe),
            ("^", TokenKind::Caret),
            ("&", TokenKind::Amp),
            ("==", TokenKind::Eq),
            ("!=", TokenKind::NotEq),
            ("<", TokenKind::Lt),
            (">", TokenKind::Gt),
            ("<=", TokenKind::Le),
            (">=", TokenKind::Ge),
            ("<<", TokenKind::Shl),
            (">>", TokenKind::Shr),
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Star),
            ("/", TokenKind::Slash),
            ("%", TokenKind::Percent),
            ("++", TokenKind::Inc),
            ("--", TokenKind::Dec),
        ];

        for (text, kind) in operators {
            assert_eq!(
                of_operator(text),
                of_kind(kind),
                "precedence tables disagree for {}",
                text
            );
        }
    }

    #[test]
    fn test_unknown_operator_is_lowest() {
        assert_eq!(of_operator("&^"), Precedence::Lowest);
        assert_eq!(of_operator("nonsense"), Precedence::Lowest);
    }
}
